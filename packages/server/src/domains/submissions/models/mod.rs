pub mod orphaned_media;
pub mod submission;

pub use orphaned_media::OrphanedMedia;
pub use submission::{Submission, SubmissionStatus};
