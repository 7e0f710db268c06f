//! Router construction and shared application state

use axum::middleware::from_fn;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{jwt_auth_middleware, JwtService};
use super::routes;
use crate::kernel::ServerDeps;

/// Shared state for all route handlers
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
}

/// Build the application router
pub fn build_app(deps: ServerDeps, jwt_service: Arc<JwtService>) -> Router {
    let state = AppState { deps };

    Router::new()
        .route("/health", get(routes::health::health_handler))
        // Campaigns
        .route(
            "/campaigns",
            get(routes::campaigns::list_campaigns).post(routes::campaigns::create_campaign),
        )
        .route("/campaigns/:id", get(routes::campaigns::get_campaign))
        .route(
            "/campaigns/:id/submissions",
            get(routes::campaigns::list_campaign_submissions),
        )
        .route(
            "/campaigns/:id/review",
            post(routes::campaigns::review_campaign),
        )
        .route(
            "/campaigns/:id/close",
            post(routes::campaigns::close_campaign),
        )
        .route(
            "/campaigns/:id/cancel",
            post(routes::campaigns::cancel_campaign),
        )
        .route("/campaigns/:id/quota", get(routes::campaigns::get_quota))
        // Submissions
        .route(
            "/submissions",
            get(routes::submissions::list_my_submissions)
                .post(routes::submissions::create_submission),
        )
        .route("/submissions/:id", get(routes::submissions::get_submission))
        .route(
            "/submissions/:id/transition",
            post(routes::submissions::transition_submission),
        )
        // Payments
        .route(
            "/payments/breakdown",
            post(routes::payments::compute_breakdown),
        )
        // Operations
        .route(
            "/orphaned-media",
            get(routes::campaigns::list_orphaned_media),
        )
        .route(
            "/orphaned-media/:id",
            delete(routes::campaigns::resolve_orphaned_media),
        )
        .layer(from_fn(move |request, next| {
            let jwt = jwt_service.clone();
            jwt_auth_middleware(jwt, request, next)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
