// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "reject a submission") lives in domain actions that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseObjectStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::MemberId;

// =============================================================================
// Object Store Trait (Infrastructure)
// =============================================================================

/// Outcome of a delete against the object store.
///
/// "Not found" is a success, not an error - deletes must be idempotent so
/// retries and double-calls are safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    AlreadyAbsent,
}

#[async_trait]
pub trait BaseObjectStore: Send + Sync {
    /// Delete a stored media object by its opaque reference.
    ///
    /// Returns `AlreadyAbsent` when the object does not exist. Errors only on
    /// genuine storage failures (network, auth, 5xx).
    async fn delete(&self, media_ref: &str) -> Result<DeleteOutcome>;
}

// =============================================================================
// Notification Service Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseNotificationService: Send + Sync {
    /// Deliver a review-decision notification to a member.
    ///
    /// `decision` is the terminal status the submission reached; `feedback`
    /// may be empty for non-reject decisions.
    async fn notify_decision(
        &self,
        recipient: MemberId,
        campaign_name: &str,
        decision: &str,
        feedback: &str,
    ) -> Result<()>;
}
