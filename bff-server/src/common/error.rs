//! Unified error handling
//!
//! Every handler returns [`AppResult`]; failures serialize into the same
//! `{ok: false, error, details?}` envelope the success path mirrors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use shared::ApiResponse;
use sporthub_client::ClientError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An upstream call failed; the mapping keeps its status when it has one
    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// An inbound payload failed validation (400)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Anything that should never leak detail to the caller (500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Upstream(ClientError::Api { status, body }) => {
                // Preserve the upstream status; keep its body as context
                let status = StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let details = serde_json::from_str(&body)
                    .unwrap_or_else(|_| serde_json::Value::String(body));
                (status, "upstream error".to_string(), Some(details))
            }
            AppError::Upstream(ClientError::Network(err)) => {
                error!(error = %err, "upstream unreachable");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream unreachable".to_string(),
                    None,
                )
            }
            AppError::Upstream(ClientError::NotFound(what)) => {
                (StatusCode::NOT_FOUND, format!("not found: {}", what), None)
            }
            AppError::Upstream(err) => {
                // Request construction and decode failures carry no status
                error!(error = %err, "upstream call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            AppError::Internal(message) => {
                error!(error = %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => ApiResponse::<()>::error_with_details(message, details),
            None => ApiResponse::<()>::error(message),
        };

        (status, Json(body)).into_response()
    }
}

/// Application-level Result type used by every handler
pub type AppResult<T> = Result<T, AppError>;

/// Wrap a payload in the success envelope
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
