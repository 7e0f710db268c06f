use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::MemberId;

/// Member - a platform account (staff, brand, or creator)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
    pub role: String, // 'staff', 'brand', 'creator'
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Member {
    /// Find member by ID
    pub async fn find_by_id(id: MemberId, pool: &PgPool) -> Result<Option<Self>> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(member)
    }

    /// Create a new member
    pub async fn create(display_name: String, role: String, pool: &PgPool) -> Result<Self> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (display_name, role)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(display_name)
        .bind(role)
        .fetch_one(pool)
        .await?;
        Ok(member)
    }
}
