//! hstoolz CLI - game asset distribution server
//!
//! Entry point for the `hstoolz` binary:
//! - `serve`: run the HTTP server (catalog listing, asset downloads)
//! - `init`: create the five asset folders under the data directory

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "hstoolz",
    author,
    version,
    about = "Serve a game catalog and per-game asset downloads over HTTP"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the asset folders and print their paths
    Init(commands::init::InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Init(args) => commands::run_init(args)?,
    }
    Ok(())
}
