//! Campaign lifecycle re-evaluation
//!
//! Runs after every successful approval: when the quota is exhausted the
//! campaign transitions to `closed`. The close is a conditional update that
//! re-checks the count, so a stale caller never closes a campaign early.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::common::CampaignId;
use crate::domains::campaigns::models::Campaign;

/// Re-derive the campaign's status from its quota state.
///
/// Returns the campaign when this call closed it.
pub async fn reevaluate(campaign_id: CampaignId, pool: &PgPool) -> Result<Option<Campaign>> {
    let closed = Campaign::close_if_full(campaign_id, pool).await?;

    if let Some(campaign) = &closed {
        info!(
            campaign_id = %campaign.id,
            quota = ?campaign.max_approved_submissions,
            "Campaign quota exhausted, closed to further approvals"
        );
    }

    Ok(closed)
}
