use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{CampaignId, MemberId, SubmissionId};

/// Submission - a creator's video submitted against a campaign
///
/// `status` is the sole mutable workflow field; media/caption are set once
/// at creation and the review fields once at review.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Submission {
    pub id: SubmissionId,
    pub campaign_id: CampaignId,
    pub creator_id: MemberId,

    // Content (set once at creation)
    pub media_ref: String,
    pub caption: String,
    pub file_name: String,
    pub file_size: i64,

    pub status: String, // 'draft', 'admin_reject', 'pending', 'approved', 'rejected', 'posted'

    pub submitted_at: DateTime<Utc>,

    // Review (set once at review)
    pub reviewed_by: Option<MemberId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub posted_at: Option<DateTime<Utc>>,
    pub feedback: Option<String>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Status enum for type-safe edges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    AdminReject,
    Pending,
    Approved,
    Rejected,
    Posted,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Draft => write!(f, "draft"),
            SubmissionStatus::AdminReject => write!(f, "admin_reject"),
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Approved => write!(f, "approved"),
            SubmissionStatus::Rejected => write!(f, "rejected"),
            SubmissionStatus::Posted => write!(f, "posted"),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(SubmissionStatus::Draft),
            "admin_reject" => Ok(SubmissionStatus::AdminReject),
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            "posted" => Ok(SubmissionStatus::Posted),
            _ => Err(anyhow::anyhow!("Invalid submission status: {}", s)),
        }
    }
}

impl Submission {
    /// Parse the persisted status string
    pub fn current_status(&self) -> Result<SubmissionStatus> {
        self.status.parse()
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Submission {
    /// Find submission by ID
    pub async fn find_by_id(id: SubmissionId, pool: &PgPool) -> Result<Option<Self>> {
        let submission = sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(submission)
    }

    /// Find submissions for a campaign, newest first
    pub async fn find_by_campaign(campaign_id: CampaignId, pool: &PgPool) -> Result<Vec<Self>> {
        let submissions = sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions WHERE campaign_id = $1 ORDER BY submitted_at DESC",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await?;
        Ok(submissions)
    }

    /// Find submissions for a campaign in a given status
    pub async fn find_by_campaign_and_status(
        campaign_id: CampaignId,
        status: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE campaign_id = $1 AND status = $2
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(campaign_id)
        .bind(status)
        .fetch_all(pool)
        .await?;
        Ok(submissions)
    }

    /// Find submissions by a creator, newest first
    pub async fn find_by_creator(creator_id: MemberId, pool: &PgPool) -> Result<Vec<Self>> {
        let submissions = sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions WHERE creator_id = $1 ORDER BY submitted_at DESC",
        )
        .bind(creator_id)
        .fetch_all(pool)
        .await?;
        Ok(submissions)
    }

    /// Create a new submission (starts in 'draft')
    pub async fn create(
        campaign_id: CampaignId,
        creator_id: MemberId,
        media_ref: String,
        caption: String,
        file_name: String,
        file_size: i64,
        pool: &PgPool,
    ) -> Result<Self> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                campaign_id,
                creator_id,
                media_ref,
                caption,
                file_name,
                file_size,
                status
            ) VALUES ($1, $2, $3, $4, $5, $6, 'draft')
            RETURNING *
            "#,
        )
        .bind(campaign_id)
        .bind(creator_id)
        .bind(media_ref)
        .bind(caption)
        .bind(file_name)
        .bind(file_size)
        .fetch_one(pool)
        .await?;
        Ok(submission)
    }

    /// Conditionally flip status: commits only if the row still holds
    /// `expected`. Returns `None` when another reviewer got there first.
    pub async fn update_status_if(
        id: SubmissionId,
        expected: SubmissionStatus,
        new_status: SubmissionStatus,
        executor: impl PgExecutor<'_>,
    ) -> Result<Option<Self>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = $3
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected.to_string())
        .bind(new_status.to_string())
        .fetch_optional(executor)
        .await?;
        Ok(submission)
    }

    /// Conditionally record a review decision: status flip plus reviewer
    /// id, review timestamp, and feedback, in one conditional write.
    pub async fn record_review_if(
        id: SubmissionId,
        expected: SubmissionStatus,
        new_status: SubmissionStatus,
        reviewed_by: MemberId,
        feedback: Option<&str>,
        executor: impl PgExecutor<'_>,
    ) -> Result<Option<Self>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = $3,
                reviewed_by = $4,
                reviewed_at = NOW(),
                feedback = $5
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected.to_string())
        .bind(new_status.to_string())
        .bind(reviewed_by)
        .bind(feedback)
        .fetch_optional(executor)
        .await?;
        Ok(submission)
    }

    /// Conditionally mark an approved submission as posted
    pub async fn mark_posted_if(
        id: SubmissionId,
        expected: SubmissionStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = 'posted', posted_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected.to_string())
        .fetch_optional(pool)
        .await?;
        Ok(submission)
    }

    /// Count submissions currently approved or posted for a campaign.
    ///
    /// Takes an executor so the approval commit can run it on the same
    /// transaction that holds the campaign row lock.
    pub async fn count_approved_for_campaign(
        campaign_id: CampaignId,
        executor: impl PgExecutor<'_>,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM submissions
            WHERE campaign_id = $1 AND status IN ('approved', 'posted')
            "#,
        )
        .bind(campaign_id)
        .fetch_one(executor)
        .await?;
        Ok(count)
    }

    /// Delete a submission row (hard delete, rejection path only)
    pub async fn delete(id: SubmissionId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
