use thiserror::Error;

use super::models::SubmissionStatus;
use crate::common::auth::AuthError;

/// Review workflow error taxonomy.
///
/// All guard failures are detected before any persistent write, so every
/// variant leaves the submission unchanged.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The requested edge is not in the transition graph. Programmer/UI
    /// error, not retryable.
    #[error("No transition from {from} to {to}")]
    InvalidTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    /// Reject-type transition without reviewer feedback. The caller must
    /// prompt for a reason and retry.
    #[error("Feedback is required when rejecting a submission")]
    MissingFeedback,

    /// The campaign has no approval slots remaining.
    #[error("No approval slots remain on this campaign")]
    QuotaExceeded,

    /// Another reviewer changed the submission since it was read. The
    /// caller should re-read and either retry or surface "already
    /// reviewed".
    #[error("This submission was already reviewed")]
    StaleState,

    #[error("Submission not found")]
    NotFound,

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Transient persistence failure; safe to retry because commits are
    /// conditional.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
