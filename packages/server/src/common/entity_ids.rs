//! Typed ID definitions for all domain entities.

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities (staff, brands, creators).
pub struct Member;

/// Marker type for Campaign entities (brand content briefs).
pub struct Campaign;

/// Marker type for Submission entities (creator video submissions).
pub struct Submission;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Campaign entities.
pub type CampaignId = Id<Campaign>;

/// Typed ID for Submission entities.
pub type SubmissionId = Id<Submission>;
