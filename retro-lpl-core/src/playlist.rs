use serde::{Deserialize, Serialize};

use crate::collection::Collection;

/// Sentinel telling RetroArch to auto-detect a field (core, CRC, ...).
pub const DETECT: &str = "DETECT";

/// Playlist format version written to the header.
pub const PLAYLIST_VERSION: &str = "1.4";

/// File extension of RetroArch playlists.
pub const PLAYLIST_EXTENSION: &str = "lpl";

/// `<collection_name>.lpl`: the playlist's file name and its items' `db_name`.
pub fn playlist_file_name(collection_name: &str) -> String {
    format!("{collection_name}.{PLAYLIST_EXTENSION}")
}

/// One launchable entry in a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub path: String,
    pub label: String,
    pub core_path: String,
    pub core_name: String,
    pub crc32: String,
    /// Name of the playlist file that owns this item (`<collection>.lpl`).
    pub db_name: String,
}

impl PlaylistItem {
    /// Build an item with all detection fields set to [`DETECT`].
    pub fn new(path: impl Into<String>, label: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            core_path: DETECT.to_string(),
            core_name: DETECT.to_string(),
            crc32: DETECT.to_string(),
            db_name: db_name.into(),
        }
    }
}

/// The full contents of a `.lpl` file.
///
/// Field order matches what RetroArch itself writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDescriptor {
    pub version: String,
    pub default_core_path: String,
    pub default_core_name: String,
    pub label_display_mode: i32,
    pub right_thumbnail_mode: i32,
    pub left_thumbnail_mode: i32,
    pub sort_mode: i32,
    pub items: Vec<PlaylistItem>,
}

impl PlaylistDescriptor {
    /// Empty descriptor with default display modes.
    pub fn new(default_core_path: impl Into<String>) -> Self {
        Self {
            version: PLAYLIST_VERSION.to_string(),
            default_core_path: default_core_path.into(),
            default_core_name: String::new(),
            label_display_mode: 0,
            right_thumbnail_mode: 0,
            left_thumbnail_mode: 0,
            sort_mode: 0,
            items: Vec::new(),
        }
    }

    /// Descriptor for a collection, populated with `items`.
    pub fn for_collection(collection: &Collection, items: Vec<PlaylistItem>) -> Self {
        let mut descriptor = Self::new(collection.core.clone());
        descriptor.items = items;
        descriptor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
