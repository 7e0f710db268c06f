//! Submissions domain actions - entry-point business logic
//!
//! Called directly from route handlers. Actions are self-contained: they
//! take raw input, perform authorization checks, and return final models.

pub mod core;
pub mod transitions;

pub use core::{create_submission, SubmitContentInput};
pub use transitions::{attempt_transition, TransitionOutcome, TransitionRequest};
