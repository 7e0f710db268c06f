//! Submission creation - a creator uploads content against a campaign

use anyhow::{Context, Result};
use tracing::info;

use crate::common::auth::{Actor, Role};
use crate::common::CampaignId;
use crate::domains::campaigns::models::{Campaign, CampaignStatus};
use crate::domains::submissions::models::Submission;
use crate::kernel::ServerDeps;

/// Input for submitting content. The media object is already uploaded; the
/// transport hands us its opaque reference.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubmitContentInput {
    pub campaign_id: CampaignId,
    pub media_ref: String,
    pub caption: String,
    pub file_name: String,
    pub file_size: i64,
}

/// Create a draft submission for the acting creator
pub async fn create_submission(
    input: SubmitContentInput,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Submission> {
    actor.require_role(Role::Creator)?;

    let campaign = Campaign::find_by_id(input.campaign_id, &deps.db_pool)
        .await?
        .context("Campaign not found")?;

    // Only a live, approved campaign accepts new submissions
    if campaign.status != CampaignStatus::Approved.to_string() {
        anyhow::bail!(
            "Campaign is not accepting submissions (status: {})",
            campaign.status
        );
    }

    info!(
        campaign_id = %campaign.id,
        creator_id = %actor.member_id,
        file_name = %input.file_name,
        "Creating submission"
    );

    Submission::create(
        input.campaign_id,
        actor.member_id,
        input.media_ref,
        input.caption,
        input.file_name,
        input.file_size,
        &deps.db_pool,
    )
    .await
}
