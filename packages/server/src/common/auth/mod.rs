//! Authorization module
//!
//! The identity context (JWT middleware) supplies an `Actor`: the acting
//! member's id plus their platform role. Actions call the `require_*`
//! checks before attempting any state transition, which keeps authorization
//! in the action layer where the transitions live, not in route handlers.

mod actor;
mod errors;

pub use actor::{Actor, Role};
pub use errors::AuthError;
