//! hstoolz-server: HTTP server for the game catalog and asset downloads
//!
//! Thin axum routing over `hstoolz-core`: catalog listing, single-file
//! downloads from the asset folders, and on-the-fly zip archives.

pub mod http;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
