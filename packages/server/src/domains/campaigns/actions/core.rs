//! Campaign CRUD actions - creation and status gating
//!
//! Staff gate a new campaign (`in_review` -> `approved`/`cancelled`); the
//! owning brand may cancel or close it at any time.

use anyhow::{Context, Result};
use tracing::info;

use crate::common::auth::{Actor, Role};
use crate::common::CampaignId;
use crate::domains::campaigns::models::{Campaign, CampaignStatus};
use crate::kernel::ServerDeps;

/// Input for creating a campaign
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateCampaignInput {
    pub name: String,
    pub rate_per_mille_cents: i64,
    pub total_budget_cents: Option<i64>,
    pub max_approved_submissions: Option<i32>,
}

/// Create a campaign owned by the acting brand (starts in review)
pub async fn create_campaign(
    input: CreateCampaignInput,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Campaign> {
    actor.require_role(Role::Brand)?;

    info!(brand_id = %actor.member_id, name = %input.name, "Creating campaign");

    Campaign::create(
        actor.member_id,
        input.name,
        input.rate_per_mille_cents,
        input.total_budget_cents,
        input.max_approved_submissions,
        &deps.db_pool,
    )
    .await
}

/// Staff decision on a new campaign: approve or cancel
pub async fn review_campaign(
    campaign_id: CampaignId,
    approve: bool,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Campaign> {
    actor.require_role(Role::Staff)?;

    let campaign = Campaign::find_by_id(campaign_id, &deps.db_pool)
        .await?
        .context("Campaign not found")?;

    if campaign.status != CampaignStatus::InReview.to_string() {
        anyhow::bail!(
            "Campaign must be in review to gate (current status: {})",
            campaign.status
        );
    }

    let target = if approve {
        CampaignStatus::Approved
    } else {
        CampaignStatus::Cancelled
    };

    info!(campaign_id = %campaign_id, target = %target, "Gating campaign");

    Campaign::update_status(campaign_id, &target.to_string(), &deps.db_pool).await
}

/// Brand manually closes its own campaign to further approvals
pub async fn close_campaign(
    campaign_id: CampaignId,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Campaign> {
    let campaign = require_owned_campaign(campaign_id, actor, deps).await?;

    info!(campaign_id = %campaign.id, "Brand closing campaign");

    Campaign::update_status(campaign_id, &CampaignStatus::Closed.to_string(), &deps.db_pool).await
}

/// Brand cancels its own campaign outright
pub async fn cancel_campaign(
    campaign_id: CampaignId,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Campaign> {
    let campaign = require_owned_campaign(campaign_id, actor, deps).await?;

    info!(campaign_id = %campaign.id, "Brand cancelling campaign");

    Campaign::update_status(
        campaign_id,
        &CampaignStatus::Cancelled.to_string(),
        &deps.db_pool,
    )
    .await
}

async fn require_owned_campaign(
    campaign_id: CampaignId,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Campaign> {
    actor.require_role(Role::Brand)?;

    let campaign = Campaign::find_by_id(campaign_id, &deps.db_pool)
        .await?
        .context("Campaign not found")?;

    if campaign.brand_id != actor.member_id {
        anyhow::bail!("Only the owning brand can manage this campaign");
    }

    Ok(campaign)
}
