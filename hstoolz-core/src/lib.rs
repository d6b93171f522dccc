pub mod archive;
pub mod catalog;
pub mod config;
pub mod error;
pub mod folders;

pub use archive::{build_archive, Archive};
pub use catalog::{CatalogRow, CatalogSource, SpreadsheetCatalog, StaticCatalog};
pub use config::HsConfig;
pub use error::{HsError, Result};
pub use folders::{AssetFolder, AssetLayout};
