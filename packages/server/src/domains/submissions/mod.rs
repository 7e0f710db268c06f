//! Submissions domain - the review workflow core
//!
//! A submission moves through a fixed transition graph:
//!
//! ```text
//! draft --(staff reject, feedback)--> admin_reject            [terminal]
//! draft --(staff approve)-----------> pending
//! pending --(brand approve)---------> approved
//! pending --(brand reject, feedback)-> rejected               [terminal; row + media deleted]
//! approved --(staff publish)--------> posted                  [terminal]
//! ```
//!
//! Components:
//! - machine: the single transition table every entry point consults
//! - policy: feedback requirements for reject-type transitions
//! - cleanup: idempotent media removal with an orphan queue on failure
//! - actions: attempt_transition and submission creation
//! - models: Submission rows and all SQL, including conditional commits

pub mod actions;
pub mod cleanup;
pub mod errors;
pub mod machine;
pub mod models;
pub mod policy;

pub use actions::{attempt_transition, TransitionOutcome};
pub use errors::WorkflowError;
pub use models::{Submission, SubmissionStatus};
