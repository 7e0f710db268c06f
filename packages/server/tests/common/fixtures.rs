//! Test fixtures - members, campaigns, and submissions in known states

use sqlx::PgPool;

use server_core::common::auth::{Actor, Role};
use server_core::domains::campaigns::models::{Campaign, CampaignStatus};
use server_core::domains::member::models::Member;
use server_core::domains::submissions::models::{Submission, SubmissionStatus};

/// Create a member with the given role and return an actor for it
pub async fn member_actor(role: Role, pool: &PgPool) -> Actor {
    let member = Member::create(format!("test-{}", role), role.to_string(), pool)
        .await
        .expect("Failed to create member");
    Actor::new(member.id, role)
}

/// Create a live (approved) campaign owned by the given brand
pub async fn live_campaign(brand: &Actor, quota: Option<i32>, pool: &PgPool) -> Campaign {
    let campaign = Campaign::create(
        brand.member_id,
        "Summer launch".to_string(),
        500,
        Some(1_000_000),
        quota,
        pool,
    )
    .await
    .expect("Failed to create campaign");

    Campaign::update_status(campaign.id, &CampaignStatus::Approved.to_string(), pool)
        .await
        .expect("Failed to approve campaign")
}

/// Create a submission and force it into the given status
pub async fn submission_in_status(
    campaign: &Campaign,
    creator: &Actor,
    status: SubmissionStatus,
    pool: &PgPool,
) -> Submission {
    let submission = Submission::create(
        campaign.id,
        creator.member_id,
        format!("media/{}.mp4", uuid::Uuid::new_v4()),
        "check out my take".to_string(),
        "take1.mp4".to_string(),
        4_200_000,
        pool,
    )
    .await
    .expect("Failed to create submission");

    if status == SubmissionStatus::Draft {
        return submission;
    }

    sqlx::query_as::<_, Submission>(
        "UPDATE submissions SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(status.to_string())
    .bind(submission.id)
    .fetch_one(pool)
    .await
    .expect("Failed to set submission status")
}
