//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use icp_classifier::ClassifyError;
use serde_json::json;
use thiserror::Error;

/// Errors returned by handlers, rendered as `{"error": ..., "detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{error}: {detail}")]
    BadRequest { error: &'static str, detail: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        if err.is_caller_error() {
            ApiError::BadRequest {
                error: "invalid_exclude",
                detail: err.to_string(),
            }
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match self {
            ApiError::BadRequest { error, detail } => (StatusCode::BAD_REQUEST, error, detail),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", detail)
            }
        };
        (status, Json(json!({ "error": error, "detail": detail }))).into_response()
    }
}
