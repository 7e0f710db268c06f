//! Campaign quota tracker
//!
//! Counts approved work fresh from the store at decision time; nothing here
//! is cached. The pure capacity rule is shared between the read-only
//! projection (`has_capacity`) and the locked check the approval commit runs
//! inside its transaction.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::common::CampaignId;
use crate::domains::campaigns::models::Campaign;
use crate::domains::submissions::models::Submission;

/// Exact count of submissions currently approved or posted for a campaign
pub async fn approved_count(campaign_id: CampaignId, pool: &PgPool) -> Result<i64> {
    Submission::count_approved_for_campaign(campaign_id, pool).await
}

/// Whether the campaign can accept one more approval
pub async fn has_capacity(campaign_id: CampaignId, pool: &PgPool) -> Result<bool> {
    let campaign = Campaign::find_by_id(campaign_id, pool)
        .await?
        .context("Campaign not found")?;
    let approved = approved_count(campaign_id, pool).await?;
    Ok(capacity_remaining(&campaign, approved))
}

/// The capacity rule: a closed campaign accepts nothing regardless of its
/// numeric quota; no quota means unlimited; otherwise strictly below quota.
pub fn capacity_remaining(campaign: &Campaign, approved: i64) -> bool {
    if campaign.is_closed() {
        return false;
    }
    match campaign.max_approved_submissions {
        None => true,
        Some(quota) => approved < quota as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CampaignId, MemberId};
    use chrono::Utc;

    fn campaign(status: &str, quota: Option<i32>) -> Campaign {
        Campaign {
            id: CampaignId::new(),
            brand_id: MemberId::new(),
            name: "Test campaign".to_string(),
            rate_per_mille_cents: 500,
            total_budget_cents: None,
            max_approved_submissions: quota,
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unlimited_when_no_quota() {
        assert!(capacity_remaining(&campaign("approved", None), 10_000));
    }

    #[test]
    fn strictly_below_quota() {
        let c = campaign("approved", Some(3));
        assert!(capacity_remaining(&c, 2));
        assert!(!capacity_remaining(&c, 3));
        assert!(!capacity_remaining(&c, 4));
    }

    #[test]
    fn closed_campaign_has_no_capacity() {
        // A manually closed campaign must not be reopened by quota arithmetic
        let c = campaign("closed", Some(10));
        assert!(!capacity_remaining(&c, 0));

        let unlimited = campaign("closed", None);
        assert!(!capacity_remaining(&unlimited, 0));
    }
}
