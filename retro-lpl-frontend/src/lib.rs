pub mod error;
pub mod retroarch;

pub use error::FrontendError;
pub use retroarch::{RetroArch, read_playlist, to_playlist_json};

use std::path::{Path, PathBuf};

use retro_lpl_core::PlaylistDescriptor;

/// Trait for launcher frontends that consume generated playlists.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// File name of the playlist for a collection called `collection_name`.
    fn playlist_file_name(&self, collection_name: &str) -> String;

    /// Write a playlist into `output_dir`, replacing any existing file.
    /// Returns the path written.
    fn write_playlist(
        &self,
        playlist: &PlaylistDescriptor,
        collection_name: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, FrontendError>;
}
