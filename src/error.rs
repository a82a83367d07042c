use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Each variant fixes the status code, so handlers decide the status by
/// choosing which variant wraps a `StoreError`. Create, list and delete wrap
/// store failures in `StoreFailure` (400) while update persistence failures
/// use `UpdateFailed` (500).
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded or misses a required field
    InvalidBody(String),
    /// Movie lookup failed
    MovieNotFound(StoreError),
    /// Store operation failed on create, list or delete
    StoreFailure(StoreError),
    /// Store write failed while persisting an update
    UpdateFailed(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MovieNotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::StoreFailure(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::UpdateFailed(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, error_message);
        } else {
            tracing::warn!("Request failed with {}: {}", status, error_message);
        }

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
