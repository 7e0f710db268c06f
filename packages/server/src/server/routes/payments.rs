//! Payment routes - on-demand payout/fee breakdowns

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domains::payments::{self, PaymentBreakdown};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct BreakdownRequest {
    pub num_creators: i64,
    pub max_payout_per_creator_cents: i64,
    #[serde(default)]
    pub flat_fee_per_creator_cents: i64,
}

pub async fn compute_breakdown(
    State(state): State<AppState>,
    Json(request): Json<BreakdownRequest>,
) -> Result<Json<PaymentBreakdown>, ApiError> {
    let breakdown = payments::compute(
        &state.deps.payments,
        request.num_creators,
        request.max_payout_per_creator_cents,
        request.flat_fee_per_creator_cents,
    )?;
    Ok(Json(breakdown))
}
