//! Plain-text directory tree listing.
//!
//! ```text
//! ROMs/
//!     readme.txt
//!     Atari - 2600/
//!         Pitfall! (USA).a26
//! ```

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;

const INDENT: usize = 4;

/// Render the tree under `root`.
///
/// Each directory is followed by its files, then its subdirectories, all
/// sorted by name and indented four spaces per level.
pub fn render_tree(root: &Path) -> Result<String, ScanError> {
    let metadata = fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut out = String::new();
    for entry in WalkDir::new(root).sort_by(files_first) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry under \"{}\": {}", root.display(), e);
                continue;
            }
        };

        let indent = " ".repeat(INDENT * entry.depth());
        let name = entry_name(&entry);
        if entry.file_type().is_dir() {
            out.push_str(&format!("{indent}{name}/\n"));
        } else {
            out.push_str(&format!("{indent}{name}\n"));
        }
    }

    Ok(out)
}

/// Render the tree under `root` and write it to `output`.
pub fn write_tree(root: &Path, output: &Path) -> Result<usize, ScanError> {
    let listing = render_tree(root)?;
    fs::write(output, &listing).map_err(|e| ScanError::io(output, e))?;
    Ok(listing.lines().count())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn entry_name(entry: &DirEntry) -> String {
    let name = entry.file_name().to_string_lossy();
    if name.is_empty() {
        entry.path().display().to_string()
    } else {
        name.into_owned()
    }
}
