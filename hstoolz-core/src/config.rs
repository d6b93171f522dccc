//! Data directory configuration
//!
//! Resolved from (lowest to highest precedence):
//! - built-in defaults (current directory, `games.xlsx` inside it)
//! - a TOML file passed to [`HsConfig::load`]
//! - environment: `HSTOOLZ_DATA_DIR`, `HSTOOLZ_CATALOG`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::SpreadsheetCatalog;
use crate::error::{HsError, Result};
use crate::folders::AssetLayout;

/// Default catalog file name inside the data directory
pub const DEFAULT_CATALOG_FILE: &str = "games.xlsx";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HsConfig {
    /// Directory holding the five asset folders
    pub data_dir: PathBuf,
    /// Catalog spreadsheet; relative paths resolve against `data_dir`
    pub catalog: Option<PathBuf>,
}

impl Default for HsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            catalog: None,
        }
    }
}

impl HsConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| HsError::config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HsError::config(format!("invalid config: {e}")))
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply `HSTOOLZ_DATA_DIR` / `HSTOOLZ_CATALOG` on top of this config
    pub fn with_env(mut self) -> Self {
        if let Ok(dir) = std::env::var("HSTOOLZ_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(catalog) = std::env::var("HSTOOLZ_CATALOG") {
            self.catalog = Some(PathBuf::from(catalog));
        }
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        match &self.catalog {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.data_dir.join(path),
            None => self.data_dir.join(DEFAULT_CATALOG_FILE),
        }
    }

    pub fn layout(&self) -> AssetLayout {
        AssetLayout::new(&self.data_dir)
    }

    pub fn catalog_source(&self) -> SpreadsheetCatalog {
        SpreadsheetCatalog::new(self.catalog_path())
    }
}
