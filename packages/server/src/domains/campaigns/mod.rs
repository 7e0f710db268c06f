//! Campaigns domain - brand content briefs
//!
//! A campaign is the unit creators submit against. This domain owns the
//! campaign lifecycle (review gating, closing) and the approval quota
//! tracker consulted by the submission workflow.

pub mod actions;
pub mod models;
pub mod quota;

pub use models::{Campaign, CampaignStatus};
