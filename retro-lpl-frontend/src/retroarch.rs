use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use retro_lpl_core::PlaylistDescriptor;

use crate::{Frontend, FrontendError};

const INDENT: &[u8] = b"    ";

/// RetroArch JSON playlists (`.lpl`).
pub struct RetroArch;

impl RetroArch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RetroArch {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for RetroArch {
    fn name(&self) -> &'static str {
        "RetroArch"
    }

    fn playlist_file_name(&self, collection_name: &str) -> String {
        retro_lpl_core::playlist_file_name(collection_name)
    }

    fn write_playlist(
        &self,
        playlist: &PlaylistDescriptor,
        collection_name: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, FrontendError> {
        if collection_name.is_empty() {
            return Err(FrontendError::invalid_playlist("empty collection name"));
        }

        fs::create_dir_all(output_dir)?;

        let json = to_playlist_json(playlist)?;
        let path = output_dir.join(self.playlist_file_name(collection_name));
        fs::write(&path, json)?;

        Ok(path)
    }
}

/// Serialize a playlist the way RetroArch lays it out: JSON, 4-space indent.
pub fn to_playlist_json(playlist: &PlaylistDescriptor) -> Result<String, FrontendError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    playlist.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| FrontendError::invalid_playlist(e.to_string()))
}

/// Read a `.lpl` file back into a descriptor.
pub fn read_playlist(path: &Path) -> Result<PlaylistDescriptor, FrontendError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
#[path = "tests/retroarch_tests.rs"]
mod tests;
