//! Directory scanner for ROM collections.
//!
//! Produces paths relative to the collection's source directory, either for
//! the direct children only or for the whole subtree.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use retro_lpl_core::{Collection, FileEntry};

use crate::error::ScanError;

/// List the regular files under `source`.
///
/// Non-recursive scans return bare filenames. Recursive scans return paths
/// relative to `source` joined with the platform separator. Both are sorted
/// by name.
pub fn scan_files(source: &Path, recursive: bool) -> Result<Vec<FileEntry>, ScanError> {
    let metadata = fs::metadata(source).map_err(|e| ScanError::io(source, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(source.to_path_buf()));
    }

    if recursive {
        scan_recursive(source)
    } else {
        scan_flat(source)
    }
}

/// Scan a collection's source directory, degrading to an empty list.
///
/// Failures are logged and never propagate: one unreadable folder must not
/// stop the remaining collections.
pub fn scan_collection(collection: &Collection) -> Vec<FileEntry> {
    let files = match scan_files(&collection.source, collection.recursive) {
        Ok(files) => files,
        Err(e) => {
            log::warn!("{} ({})", e, collection.name);
            return Vec::new();
        }
    };

    if files.is_empty() {
        log::warn!("No files found: \"{}\".", collection.source.display());
    } else {
        log::debug!(
            "Scanned {} file(s) in \"{}\"",
            files.len(),
            collection.source.display()
        );
    }
    files
}

fn scan_flat(source: &Path) -> Result<Vec<FileEntry>, ScanError> {
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(source).map_err(|e| ScanError::io(source, e))? {
        let entry = entry.map_err(|e| ScanError::io(source, e))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names.into_iter().map(FileEntry::new).collect())
}

fn scan_recursive(source: &Path) -> Result<Vec<FileEntry>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skip_walk_error(source, e)?;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let relative = relative.to_string_lossy();
        files.push(FileEntry::new(strip_current_dir(&relative)));
    }

    Ok(files)
}

/// Unreadable entries below `source` are logged and skipped. A failure on
/// `source` itself is returned, the same as for a flat scan.
fn skip_walk_error(source: &Path, error: walkdir::Error) -> Result<(), ScanError> {
    if error.depth() > 0 && error.path() != Some(source) {
        log::warn!("Skipping unreadable entry under \"{}\": {}", source.display(), error);
        return Ok(());
    }
    let message = error.to_string();
    let io = error
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    Err(ScanError::io(source, io))
}

/// Remove a leading `./` (or `.\`) marker.
fn strip_current_dir(path: &str) -> &str {
    path.strip_prefix("./")
        .or_else(|| path.strip_prefix(".\\"))
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
