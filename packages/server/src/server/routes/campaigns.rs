//! Campaign routes - creation, gating, closing, and quota projections

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;
use crate::common::auth::Role;
use crate::common::CampaignId;
use crate::domains::campaigns::models::Campaign;
use crate::domains::campaigns::{actions, quota};
use crate::domains::submissions::models::{OrphanedMedia, Submission};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

pub async fn create_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<actions::CreateCampaignInput>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign = actions::create_campaign(input, user.actor(), &state.deps).await?;
    Ok(Json(campaign))
}

/// List campaigns owned by the acting brand
pub async fn list_campaigns(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Campaign>>, ApiError> {
    let campaigns = Campaign::find_by_brand(user.member_id, &state.deps.db_pool).await?;
    Ok(Json(campaigns))
}

pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<CampaignId>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign = Campaign::find_by_id(id, &state.deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Campaign not found"))?;
    Ok(Json(campaign))
}

#[derive(Deserialize)]
pub struct SubmissionListQuery {
    pub status: Option<String>,
}

pub async fn list_campaign_submissions(
    State(state): State<AppState>,
    Path(id): Path<CampaignId>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions = match query.status {
        Some(status) => {
            Submission::find_by_campaign_and_status(id, &status, &state.deps.db_pool).await?
        }
        None => Submission::find_by_campaign(id, &state.deps.db_pool).await?,
    };
    Ok(Json(submissions))
}

#[derive(Deserialize)]
pub struct ReviewCampaignRequest {
    pub approve: bool,
}

/// Staff gate: approve or cancel a campaign in review
pub async fn review_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<CampaignId>,
    Json(request): Json<ReviewCampaignRequest>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign =
        actions::review_campaign(id, request.approve, user.actor(), &state.deps).await?;
    Ok(Json(campaign))
}

/// Brand closes its own campaign to further approvals
pub async fn close_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<CampaignId>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign = actions::close_campaign(id, user.actor(), &state.deps).await?;
    Ok(Json(campaign))
}

/// Brand cancels its own campaign outright
pub async fn cancel_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<CampaignId>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign = actions::cancel_campaign(id, user.actor(), &state.deps).await?;
    Ok(Json(campaign))
}

#[derive(Serialize)]
pub struct QuotaResponse {
    pub approved_count: i64,
    pub has_capacity: bool,
}

/// Read-only quota projection
pub async fn get_quota(
    State(state): State<AppState>,
    Path(id): Path<CampaignId>,
) -> Result<Json<QuotaResponse>, ApiError> {
    let approved_count = quota::approved_count(id, &state.deps.db_pool).await?;
    let has_capacity = quota::has_capacity(id, &state.deps.db_pool).await?;
    Ok(Json(QuotaResponse {
        approved_count,
        has_capacity,
    }))
}

/// Staff view of storage objects awaiting a manual sweep
pub async fn list_orphaned_media(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<OrphanedMedia>>, ApiError> {
    user.actor().require_role(Role::Staff)?;
    let orphans = OrphanedMedia::list(&state.deps.db_pool).await?;
    Ok(Json(orphans))
}

/// Staff marks an orphan entry as swept
pub async fn resolve_orphaned_media(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    user.actor().require_role(Role::Staff)?;
    OrphanedMedia::resolve(id, &state.deps.db_pool).await?;
    Ok(Json(serde_json::json!({ "resolved": id })))
}
