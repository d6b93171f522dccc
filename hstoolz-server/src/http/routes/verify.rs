//! Key verification stub
//!
//! Accepts any key of at least [`MIN_KEY_LEN`] characters. There is no
//! key store behind it.

use std::sync::Arc;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

pub const MIN_KEY_LEN: usize = 5;

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /verify?key=
async fn verify(Query(params): Query<VerifyParams>) -> (StatusCode, Json<VerifyResponse>) {
    let accepted = params
        .key
        .as_deref()
        .is_some_and(|key| key.chars().count() >= MIN_KEY_LEN);
    tracing::debug!(accepted, "key verification");

    if accepted {
        (
            StatusCode::OK,
            Json(VerifyResponse {
                status: "success",
                message: "Key verified successfully",
            }),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse {
                status: "error",
                message: "Invalid key",
            }),
        )
    }
}

/// Verification routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/verify", get(verify))
}
