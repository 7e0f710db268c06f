//! Submission routes - creation and review transitions

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::common::SubmissionId;
use crate::domains::submissions::actions::{self, SubmitContentInput, TransitionRequest};
use crate::domains::submissions::models::Submission;
use crate::domains::submissions::TransitionOutcome;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

pub async fn create_submission(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SubmitContentInput>,
) -> Result<Json<Submission>, ApiError> {
    let submission = actions::create_submission(input, user.actor(), &state.deps).await?;
    Ok(Json(submission))
}

/// List the acting creator's own submissions
pub async fn list_my_submissions(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions = Submission::find_by_creator(user.member_id, &state.deps.db_pool).await?;
    Ok(Json(submissions))
}

pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<SubmissionId>,
) -> Result<Json<Submission>, ApiError> {
    let submission = Submission::find_by_id(id, &state.deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Submission not found"))?;
    Ok(Json(submission))
}

#[derive(Serialize)]
pub struct TransitionResponse {
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,
}

/// Propose a review transition on a submission
pub async fn transition_submission(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<SubmissionId>,
    Json(request): Json<TransitionRequest>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let outcome = actions::attempt_transition(id, request, user.actor(), &state.deps).await?;

    let response = match outcome {
        TransitionOutcome::Updated(submission) => TransitionResponse {
            deleted: false,
            submission: Some(submission),
        },
        TransitionOutcome::Deleted(_) => TransitionResponse {
            deleted: true,
            submission: None,
        },
    };
    Ok(Json(response))
}
