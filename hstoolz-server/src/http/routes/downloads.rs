//! Asset download endpoints
//!
//! Single files are streamed from disk; directories are zipped in memory
//! on the blocking pool and sent as one body.

use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use hstoolz_core::{Archive, AssetFolder, AssetLayout, HsError};
use tokio_util::io::ReaderStream;
use tracing::instrument;

use super::blocking;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /download/stplugin/{id}
#[instrument(skip(state))]
async fn stplugin(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Response, ApiError> {
    let path = resolve(&state, move |layout| layout.plugin_file(&game_id)).await?;
    file_response(path).await
}

/// GET /download/depotcache/{id}
#[instrument(skip(state))]
async fn depotcache(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Response, ApiError> {
    let path = resolve(&state, move |layout| layout.depot_manifest(&game_id)).await?;
    file_response(path).await
}

/// GET /download/librarycache_appcache/{id}
#[instrument(skip(state))]
async fn librarycache_appcache(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Response, ApiError> {
    let archive = resolve(&state, move |layout| layout.archive_appcache(&game_id)).await?;
    Ok(archive_response(archive))
}

/// GET /download/librarycache_userdata_config/{id}
#[instrument(skip(state))]
async fn librarycache_userdata_config(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Response, ApiError> {
    let path = resolve(&state, move |layout| layout.userdata_config_file(&game_id)).await?;
    file_response(path).await
}

/// GET /download/sample_files/{name}
#[instrument(skip(state))]
async fn sample_file(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    let path = resolve(&state, move |layout| layout.sample_file(&file_name)).await?;
    file_response(path).await
}

/// GET /download/folder/{name} - one of the five asset folders as a zip
#[instrument(skip(state))]
async fn folder(
    State(state): State<Arc<AppState>>,
    Path(folder_name): Path<String>,
) -> Result<Response, ApiError> {
    let folder: AssetFolder = folder_name.parse()?;
    let archive = resolve(&state, move |layout| layout.archive_folder(folder)).await?;
    Ok(archive_response(archive))
}

async fn resolve<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&AssetLayout) -> hstoolz_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let layout = state.layout.clone();
    blocking(move || op(&layout)).await
}

/// Stream a file from disk as an attachment.
async fn file_response(path: PathBuf) -> Result<Response, ApiError> {
    let file = tokio::fs::File::open(&path).await.map_err(HsError::from)?;
    let len = file.metadata().await.map_err(HsError::from)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!(path = %path.display(), bytes = len, "sending file");

    let headers = [
        (header::CONTENT_TYPE, content_type_for(&path).to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&name)),
        (header::CONTENT_LENGTH, len.to_string()),
    ];
    Ok((headers, Body::from_stream(ReaderStream::new(file))).into_response())
}

fn archive_response(archive: Archive) -> Response {
    tracing::debug!(
        file_name = %archive.file_name,
        entries = archive.entries,
        bytes = archive.bytes.len(),
        "sending archive"
    );
    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&archive.file_name)),
    ];
    (headers, Body::from(archive.bytes)).into_response()
}

fn content_type_for(path: &FsPath) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => "application/json",
        Some("lua") => "text/x-lua",
        Some("txt") => "text/plain; charset=utf-8",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}

/// `attachment` disposition; non-ASCII names also get an RFC 5987 `filename*`.
fn content_disposition(file_name: &str) -> String {
    let plain = file_name
        .chars()
        .all(|c| c.is_ascii_graphic() || c == ' ')
        && !file_name.contains(['"', '\\']);
    if plain {
        return format!("attachment; filename=\"{file_name}\"");
    }

    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded: String = file_name
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&b) {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

/// Download routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/download/stplugin/{id}", get(stplugin))
        .route("/download/depotcache/{id}", get(depotcache))
        .route(
            "/download/librarycache_appcache/{id}",
            get(librarycache_appcache),
        )
        .route(
            "/download/librarycache_userdata_config/{id}",
            get(librarycache_userdata_config),
        )
        .route("/download/sample_files/{name}", get(sample_file))
        .route("/download/folder/{name}", get(folder))
}
