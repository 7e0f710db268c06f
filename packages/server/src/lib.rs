// Clipline - Creator Marketplace API Core
//
// This crate provides the backend core for the brand/creator content
// marketplace: campaign quota tracking, the submission review workflow,
// and the payment calculation engine.
//
// Architecture follows domain-driven design; each domain owns its models
// (all SQL lives in models/) and actions (entry-point business logic).

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
