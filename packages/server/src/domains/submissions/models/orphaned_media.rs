use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// OrphanedMedia - storage objects whose deletion failed during a rejection
///
/// Cleanup failure never blocks the rejection itself; the reference lands
/// here for a manual sweep by staff.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrphanedMedia {
    pub id: Uuid,
    pub media_ref: String,
    pub submission_id: Uuid,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl OrphanedMedia {
    /// Record a failed cleanup for manual follow-up
    pub async fn record(
        media_ref: &str,
        submission_id: Uuid,
        reason: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        let orphan = sqlx::query_as::<_, OrphanedMedia>(
            r#"
            INSERT INTO orphaned_media (media_ref, submission_id, reason)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(media_ref)
        .bind(submission_id)
        .bind(reason)
        .fetch_one(pool)
        .await?;
        Ok(orphan)
    }

    /// List orphans for the staff sweep, oldest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        let orphans = sqlx::query_as::<_, OrphanedMedia>(
            "SELECT * FROM orphaned_media ORDER BY recorded_at ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(orphans)
    }

    /// Remove an orphan entry once the object has been swept
    pub async fn resolve(id: Uuid, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM orphaned_media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
