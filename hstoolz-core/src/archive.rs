//! On-demand directory archiving.
//!
//! Walks a directory tree and deflates every regular file into a zip held
//! entirely in memory. Entries are named by their path relative to the
//! archived directory, so extracting the archive reproduces the tree.

use std::fs::File;
use std::io::{self, Cursor};
use std::path::{Component, Path};

use tracing::debug;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{HsError, Result};

/// A fully materialised zip archive ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct Archive {
    /// Download file name, always ending in `.zip`
    pub file_name: String,
    /// Encoded zip bytes
    pub bytes: Vec<u8>,
    /// Number of file entries written
    pub entries: usize,
}

/// Archive every regular file under `source_dir` into `{name}.zip`.
///
/// Files are visited in lexical order within each directory, symlinks are
/// followed, and empty directories produce no entries. Returns
/// [`HsError::NotFound`] when `source_dir` is missing or not a directory.
/// Any I/O failure aborts the whole archive.
pub fn build_archive(source_dir: &Path, name: &str) -> Result<Archive> {
    if !source_dir.is_dir() {
        return Err(HsError::not_found(format!(
            "Directory {} not found",
            source_dir.display()
        )));
    }

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let mut entries = 0usize;

    for entry in WalkDir::new(source_dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "entry outside archive root"))?;
        let entry_name = entry_name(relative);

        let mut file = File::open(entry.path())?;
        zip.start_file(entry_name, options)?;
        io::copy(&mut file, &mut zip)?;
        entries += 1;
    }

    let bytes = zip.finish()?.into_inner();
    debug!(
        source = %source_dir.display(),
        entries,
        bytes = bytes.len(),
        "built archive"
    );

    Ok(Archive {
        file_name: format!("{name}.zip"),
        bytes,
        entries,
    })
}

/// Zip entry name for a relative path: components joined with `/`.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
