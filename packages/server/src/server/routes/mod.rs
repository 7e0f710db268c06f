pub mod campaigns;
pub mod health;
pub mod payments;
pub mod submissions;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::common::auth::AuthError;
use crate::domains::payments::PaymentError;
use crate::domains::submissions::WorkflowError;

/// JSON error envelope for all routes
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        let status = match &err {
            WorkflowError::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            WorkflowError::MissingFeedback => StatusCode::BAD_REQUEST,
            // Both conflicts: no slots remain / already reviewed
            WorkflowError::QuotaExceeded | WorkflowError::StaleState => StatusCode::CONFLICT,
            WorkflowError::NotFound => StatusCode::NOT_FOUND,
            WorkflowError::Auth(AuthError::AuthenticationRequired) => StatusCode::UNAUTHORIZED,
            WorkflowError::Auth(_) => StatusCode::FORBIDDEN,
            WorkflowError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match &err {
            AuthError::AuthenticationRequired | AuthError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::FORBIDDEN,
        };
        Self::new(status, err.to_string())
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Auth failures surface from actions through anyhow
        if let Some(auth) = err.downcast_ref::<AuthError>() {
            return Self::new(
                match auth {
                    AuthError::AuthenticationRequired | AuthError::InvalidToken => {
                        StatusCode::UNAUTHORIZED
                    }
                    _ => StatusCode::FORBIDDEN,
                },
                auth.to_string(),
            );
        }
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}
