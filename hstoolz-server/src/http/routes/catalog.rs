//! Game catalog endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use hstoolz_core::CatalogRow;
use tracing::instrument;

use super::blocking;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /gamelist - every catalog row, re-read from the source
#[instrument(skip(state))]
async fn game_list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CatalogRow>>, ApiError> {
    let catalog = Arc::clone(&state.catalog);
    let rows = blocking(move || catalog.list_games()).await?;
    tracing::debug!(rows = rows.len(), "served game list");
    Ok(Json(rows))
}

/// Catalog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/gamelist", get(game_list))
}
