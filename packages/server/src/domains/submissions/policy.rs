//! Feedback policy for reject-type transitions
//!
//! A rejection is irreversible and money-relevant, so it must always carry
//! a reason the creator can act on. Approvals may optionally carry feedback
//! (stored, not required).

use super::errors::WorkflowError;
use super::models::SubmissionStatus;

/// True exactly for the reject-type target statuses
pub fn requires_feedback(target: SubmissionStatus) -> bool {
    matches!(
        target,
        SubmissionStatus::AdminReject | SubmissionStatus::Rejected
    )
}

/// Validate the feedback supplied for a proposed transition.
///
/// Whitespace-only feedback counts as missing.
pub fn validate(target: SubmissionStatus, feedback: Option<&str>) -> Result<(), WorkflowError> {
    if !requires_feedback(target) {
        return Ok(());
    }
    match feedback {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(WorkflowError::MissingFeedback),
    }
}
