//! Asset cleanup coordinator
//!
//! Removes the stored media object behind a rejected submission. Removal
//! and row deletion are two steps with independent failure domains: a
//! storage failure is logged and queued in `orphaned_media`, never allowed
//! to block the rejection. An orphaned object is a recoverable operational
//! cost; a deleted-but-unremovable row is not.

use std::time::Duration;
use tracing::{error, info, warn};

use super::models::{OrphanedMedia, Submission};
use crate::kernel::{DeleteOutcome, ServerDeps};

/// Deadline for the storage call; past it the cleanup is treated as failed
/// and the reference is queued for the sweep.
const CLEANUP_TIMEOUT: Duration = Duration::from_secs(15);

/// Remove the media behind a submission.
///
/// Idempotent ("already absent" is success). Returns `None` when storage
/// failed; the failure has already been recorded for manual follow-up.
pub async fn remove_media(submission: &Submission, deps: &ServerDeps) -> Option<DeleteOutcome> {
    let media_ref = submission.media_ref.as_str();

    let result = tokio::time::timeout(CLEANUP_TIMEOUT, deps.object_store.delete(media_ref)).await;

    let failure_reason = match result {
        Ok(Ok(outcome)) => {
            info!(media_ref = %media_ref, ?outcome, "Media cleanup complete");
            return Some(outcome);
        }
        Ok(Err(e)) => format!("storage error: {}", e),
        Err(_) => format!("storage timeout after {:?}", CLEANUP_TIMEOUT),
    };

    warn!(
        media_ref = %media_ref,
        submission_id = %submission.id,
        "Media cleanup failed, queueing orphan: {}",
        failure_reason
    );

    if let Err(e) = OrphanedMedia::record(
        media_ref,
        submission.id.into_uuid(),
        &failure_reason,
        &deps.db_pool,
    )
    .await
    {
        // The orphan queue itself failed; the log line is the last trace.
        error!(media_ref = %media_ref, "Failed to record orphaned media: {}", e);
    }

    None
}
