//! Asset folder layout - paths and per-game naming conventions
//!
//! All asset folders live directly under one data directory:
//! - `stplugin/{id}.lua`
//! - `depotcache/{id}_*.manifest`
//! - `librarycache_appcache/{id}/` (whole subdirectory)
//! - `librarycache_userdata_config/{id}.json`
//! - `sample_files/{name}`

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::archive::{build_archive, Archive};
use crate::error::{HsError, Result};

/// One of the five fixed asset folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetFolder {
    Stplugin,
    Depotcache,
    LibrarycacheAppcache,
    LibrarycacheUserdataConfig,
    SampleFiles,
}

impl AssetFolder {
    pub const ALL: [AssetFolder; 5] = [
        AssetFolder::Stplugin,
        AssetFolder::Depotcache,
        AssetFolder::LibrarycacheAppcache,
        AssetFolder::LibrarycacheUserdataConfig,
        AssetFolder::SampleFiles,
    ];

    /// Directory name on disk (also the URL segment)
    pub fn name(self) -> &'static str {
        match self {
            Self::Stplugin => "stplugin",
            Self::Depotcache => "depotcache",
            Self::LibrarycacheAppcache => "librarycache_appcache",
            Self::LibrarycacheUserdataConfig => "librarycache_userdata_config",
            Self::SampleFiles => "sample_files",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for AssetFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetFolder {
    type Err = HsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|folder| folder.name() == s)
            .ok_or_else(|| HsError::invalid_folder(s))
    }
}

/// Resolved asset layout rooted at the data directory
#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder_path(&self, folder: AssetFolder) -> PathBuf {
        self.root.join(folder.name())
    }

    /// Create every asset folder that does not exist yet
    pub fn ensure_folders(&self) -> Result<()> {
        for folder in AssetFolder::ALL {
            let path = self.folder_path(folder);
            if !path.is_dir() {
                fs::create_dir_all(&path)?;
                info!(path = %path.display(), "created asset folder");
            }
        }
        Ok(())
    }

    /// GET /download/stplugin/{id}
    pub fn plugin_file(&self, game_id: &str) -> Result<PathBuf> {
        let missing = || HsError::not_found(format!("No stplugin file found for game {game_id}"));
        check_segment(game_id).map_err(|_| missing())?;

        existing_file(self.folder_path(AssetFolder::Stplugin).join(format!("{game_id}.lua")))
            .ok_or_else(missing)
    }

    /// First `{id}_*.manifest` in lexical order
    pub fn depot_manifest(&self, game_id: &str) -> Result<PathBuf> {
        let missing = || HsError::not_found(format!("No depotcache file found for game {game_id}"));
        check_segment(game_id).map_err(|_| missing())?;

        let dir = self.folder_path(AssetFolder::Depotcache);
        if !dir.is_dir() {
            return Err(missing());
        }

        let prefix = format!("{game_id}_");
        let mut candidates = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with(&prefix) && name.ends_with(".manifest") && entry.path().is_file() {
                candidates.push(entry.path());
            }
        }
        candidates.sort();
        debug!(game_id, matches = candidates.len(), "depotcache lookup");

        candidates.into_iter().next().ok_or_else(missing)
    }

    pub fn appcache_dir(&self, game_id: &str) -> Result<PathBuf> {
        let missing = || {
            HsError::not_found(format!(
                "No librarycache_appcache folder found for game {game_id}"
            ))
        };
        check_segment(game_id).map_err(|_| missing())?;

        let dir = self
            .folder_path(AssetFolder::LibrarycacheAppcache)
            .join(game_id);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(missing())
        }
    }

    pub fn userdata_config_file(&self, game_id: &str) -> Result<PathBuf> {
        let missing = || {
            HsError::not_found(format!(
                "No librarycache_userdata_config file found for game {game_id}"
            ))
        };
        check_segment(game_id).map_err(|_| missing())?;

        existing_file(
            self.folder_path(AssetFolder::LibrarycacheUserdataConfig)
                .join(format!("{game_id}.json")),
        )
        .ok_or_else(missing)
    }

    pub fn sample_file(&self, file_name: &str) -> Result<PathBuf> {
        let missing = || HsError::not_found(format!("Sample file {file_name} not found"));
        check_segment(file_name).map_err(|_| missing())?;

        existing_file(self.folder_path(AssetFolder::SampleFiles).join(file_name))
            .ok_or_else(missing)
    }

    /// Zip a game's appcache subdirectory as `{id}_librarycache_appcache.zip`
    pub fn archive_appcache(&self, game_id: &str) -> Result<Archive> {
        let dir = self.appcache_dir(game_id)?;
        build_archive(&dir, &format!("{game_id}_librarycache_appcache"))
    }

    /// Zip a whole asset folder as `{folder}.zip`
    pub fn archive_folder(&self, folder: AssetFolder) -> Result<Archive> {
        let dir = self.folder_path(folder);
        if !dir.is_dir() {
            return Err(HsError::not_found(format!("Folder {folder} not found")));
        }
        build_archive(&dir, folder.name())
    }
}

/// Request-supplied names must stay inside their asset folder.
fn check_segment(segment: &str) -> Result<()> {
    let invalid = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\', '\0']);
    if invalid {
        return Err(HsError::not_found(format!("invalid path segment '{segment}'")));
    }
    Ok(())
}

fn existing_file(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}
