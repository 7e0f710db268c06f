//! Campaigns domain actions - entry-point business logic
//!
//! Called directly from route handlers. Actions are self-contained: they
//! take raw input, perform authorization checks, and return final models.

pub mod core;
pub mod lifecycle;

pub use core::*;
pub use lifecycle::reevaluate;
