//! Submission state machine - the legal transition table
//!
//! Every entry point consults this one table; transition rules do not live
//! anywhere else. Statuses are monotonic through the graph: no edge skips
//! or reverses a stage, and terminal statuses have no outgoing edges.

use super::errors::WorkflowError;
use super::models::SubmissionStatus;
use crate::common::auth::Role;

/// A legal edge in the transition graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// Role permitted to trigger this transition
    pub actor: Role,
}

/// Look up the rule for `(from, to)`; `None` means the edge does not exist.
pub fn transition_rule(from: SubmissionStatus, to: SubmissionStatus) -> Option<TransitionRule> {
    use SubmissionStatus::*;

    match (from, to) {
        (Draft, AdminReject) => Some(TransitionRule { actor: Role::Staff }),
        (Draft, Pending) => Some(TransitionRule { actor: Role::Staff }),
        (Pending, Approved) => Some(TransitionRule { actor: Role::Brand }),
        (Pending, Rejected) => Some(TransitionRule { actor: Role::Brand }),
        (Approved, Posted) => Some(TransitionRule { actor: Role::Staff }),
        _ => None,
    }
}

/// Check the edge, returning the taxonomy error for missing edges.
pub fn check_transition(
    from: SubmissionStatus,
    to: SubmissionStatus,
) -> Result<TransitionRule, WorkflowError> {
    transition_rule(from, to).ok_or(WorkflowError::InvalidTransition { from, to })
}
