//! Status endpoint listing the available routes

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Routes advertised by `GET /`
pub const ENDPOINTS: [&str; 8] = [
    "/gamelist",
    "/download/stplugin/<game_id>",
    "/download/depotcache/<game_id>",
    "/download/librarycache_appcache/<game_id>",
    "/download/librarycache_userdata_config/<game_id>",
    "/download/sample_files/<filename>",
    "/download/folder/<folder_name>",
    "/verify?key=<key>",
];

/// Status response
#[derive(Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET /
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "online",
        message: "Hs Toolz Server is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: &ENDPOINTS,
    })
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
