//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON bodies with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hstoolz_core::HsError;
use serde_json::json;
use tokio::task::JoinError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing file, folder or game (404)
    NotFound { message: String },

    /// Unrecognised folder name (400)
    BadRequest { message: String },

    /// Catalog unreadable, archive I/O failure, ... (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound { message } | Self::BadRequest { message } => message,
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<HsError> for ApiError {
    fn from(e: HsError) -> Self {
        match e {
            HsError::NotFound { message } => Self::NotFound { message },
            HsError::InvalidFolder { .. } => Self::BadRequest {
                message: e.to_string(),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(e: JoinError) -> Self {
        Self::Internal {
            message: format!("blocking task failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_404_with_message() {
        let err = ApiError::from(HsError::not_found("No stplugin file found for game 999"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"error": "No stplugin file found for game 999"}));
    }

    #[tokio::test]
    async fn invalid_folder_is_400() {
        let err = ApiError::from(HsError::invalid_folder("unknown"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn io_failure_is_500() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApiError::from(HsError::from(io));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
