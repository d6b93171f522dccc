//! Structured error types for hstoolz-core.
//!
//! Uses `thiserror` so the HTTP layer can map each variant onto a status
//! code. The binary crate wraps these in `anyhow` where it only needs to
//! report them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::folders::AssetFolder;

/// Main error type for hstoolz-core operations
#[derive(Error, Debug)]
pub enum HsError {
    /// Requested file, folder or game identifier does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Folder name is not one of the five asset folders
    #[error("Invalid folder name '{name}'. Must be one of: {}", AssetFolder::names().join(", "))]
    InvalidFolder { name: String },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Directory traversal failed (unreadable entry, symlink loop, ...)
    #[error("Failed to walk directory: {source}")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    /// Zip encoding failed
    #[error("Failed to write archive: {source}")]
    Zip {
        #[from]
        source: zip::result::ZipError,
    },

    /// Catalog spreadsheet could not be read
    #[error("Failed to read catalog {path:?}: {reason}")]
    Catalog { path: PathBuf, reason: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for hstoolz-core operations
pub type Result<T> = std::result::Result<T, HsError>;

impl HsError {
    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid folder error
    pub fn invalid_folder(name: impl Into<String>) -> Self {
        Self::InvalidFolder { name: name.into() }
    }

    /// Create a catalog error
    pub fn catalog(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Catalog {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True for errors the caller should report as a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HsError::not_found("No stplugin file found for game 999");
        assert_eq!(err.to_string(), "No stplugin file found for game 999");

        let err = HsError::catalog("/tmp/games.xlsx", "no worksheets");
        assert!(err.to_string().contains("Failed to read catalog"));
        assert!(err.to_string().contains("/tmp/games.xlsx"));
    }

    #[test]
    fn test_invalid_folder_lists_all_names() {
        let msg = HsError::invalid_folder("unknown").to_string();
        for name in AssetFolder::names() {
            assert!(msg.contains(name), "missing {name} in {msg}");
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: HsError = io_err.into();

        assert!(matches!(err, HsError::Io { .. }));
        assert!(!err.is_not_found());
    }
}
