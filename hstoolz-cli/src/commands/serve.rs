//! HTTP server command
//!
//! Runs the hstoolz HTTP server over the configured data directory.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use hstoolz_server::{run_server, AppState, ServerConfig};

use super::DataArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.data.resolve()?;
    let bind_addr = SocketAddr::new(args.host, args.port);

    tracing::info!(
        data_dir = %config.data_dir.display(),
        catalog = %config.catalog_path().display(),
        "Starting hstoolz server on {}",
        bind_addr
    );

    let state = AppState::new(config.layout(), config.catalog_source());
    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
