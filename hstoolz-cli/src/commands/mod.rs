//! Command implementations for the hstoolz CLI

pub mod init;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hstoolz_core::HsConfig;

// Re-export main dispatcher functions for flat access from main.rs
pub use init::run_init;
pub use serve::run_serve;

/// Where the asset folders and catalog live
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// TOML config file (data_dir, catalog)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory holding the asset folders (overrides config and HSTOOLZ_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Catalog spreadsheet (overrides config and HSTOOLZ_CATALOG)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl DataArgs {
    /// Config file, then environment, then explicit flags
    pub fn resolve(&self) -> Result<HsConfig> {
        let mut config = match &self.config {
            Some(path) => HsConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
                .with_env(),
            None => HsConfig::from_env(),
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        Ok(config)
    }
}
