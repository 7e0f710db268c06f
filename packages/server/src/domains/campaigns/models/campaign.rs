use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};

use crate::common::{CampaignId, MemberId};

/// Campaign - a brand's paid content brief
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Campaign {
    pub id: CampaignId,
    pub brand_id: MemberId,

    pub name: String,

    // Economics (all amounts in integer cents)
    pub rate_per_mille_cents: i64, // payout per 1000 verified views
    pub total_budget_cents: Option<i64>,

    /// Approval quota; NULL means unlimited
    pub max_approved_submissions: Option<i32>,

    pub status: String, // 'in_review', 'approved', 'cancelled', 'closed'

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Campaign status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    InReview,
    Approved,
    Cancelled,
    Closed,
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::InReview => write!(f, "in_review"),
            CampaignStatus::Approved => write!(f, "approved"),
            CampaignStatus::Cancelled => write!(f, "cancelled"),
            CampaignStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in_review" => Ok(CampaignStatus::InReview),
            "approved" => Ok(CampaignStatus::Approved),
            "cancelled" => Ok(CampaignStatus::Cancelled),
            "closed" => Ok(CampaignStatus::Closed),
            _ => Err(anyhow::anyhow!("Invalid campaign status: {}", s)),
        }
    }
}

impl Campaign {
    /// Whether this campaign is closed to further approvals
    pub fn is_closed(&self) -> bool {
        self.status == CampaignStatus::Closed.to_string()
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Campaign {
    /// Find campaign by ID
    pub async fn find_by_id(id: CampaignId, pool: &PgPool) -> Result<Option<Self>> {
        let campaign = sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(campaign)
    }

    /// Find campaign by ID with a row lock, inside a transaction.
    ///
    /// The lock serializes approval commits per campaign so the quota count
    /// and the status write observe a consistent state.
    pub async fn find_by_id_locked(
        id: CampaignId,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        let campaign =
            sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(conn)
                .await?;
        Ok(campaign)
    }

    /// Find campaigns owned by a brand
    pub async fn find_by_brand(brand_id: MemberId, pool: &PgPool) -> Result<Vec<Self>> {
        let campaigns = sqlx::query_as::<_, Campaign>(
            "SELECT * FROM campaigns WHERE brand_id = $1 ORDER BY created_at DESC",
        )
        .bind(brand_id)
        .fetch_all(pool)
        .await?;
        Ok(campaigns)
    }

    /// Create a new campaign (starts in 'in_review')
    pub async fn create(
        brand_id: MemberId,
        name: String,
        rate_per_mille_cents: i64,
        total_budget_cents: Option<i64>,
        max_approved_submissions: Option<i32>,
        pool: &PgPool,
    ) -> Result<Self> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            INSERT INTO campaigns (
                brand_id,
                name,
                rate_per_mille_cents,
                total_budget_cents,
                max_approved_submissions,
                status
            ) VALUES ($1, $2, $3, $4, $5, 'in_review')
            RETURNING *
            "#,
        )
        .bind(brand_id)
        .bind(name)
        .bind(rate_per_mille_cents)
        .bind(total_budget_cents)
        .bind(max_approved_submissions)
        .fetch_one(pool)
        .await?;
        Ok(campaign)
    }

    /// Update campaign status
    pub async fn update_status(id: CampaignId, status: &str, pool: &PgPool) -> Result<Self> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            UPDATE campaigns
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(campaign)
    }

    /// Close the campaign if its approval quota is exhausted.
    ///
    /// Conditional on the quota actually being met at commit time, so a
    /// stale caller cannot close a campaign that still has capacity.
    /// Returns the campaign when it was closed by this call.
    pub async fn close_if_full(id: CampaignId, pool: &PgPool) -> Result<Option<Self>> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            UPDATE campaigns c
            SET status = 'closed', updated_at = NOW()
            WHERE c.id = $1
              AND c.status != 'closed'
              AND c.max_approved_submissions IS NOT NULL
              AND (
                  SELECT COUNT(*) FROM submissions s
                  WHERE s.campaign_id = c.id AND s.status IN ('approved', 'posted')
              ) >= c.max_approved_submissions
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(campaign)
    }
}
