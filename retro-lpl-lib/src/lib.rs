//! Playlist generation for retro-lpl: directory scanning, playlist
//! building, configuration and the directory tree listing.

pub mod builder;
pub mod error;
pub mod generate;
pub mod scanner;
pub mod settings;
pub mod tree;

pub use error::{ConfigError, GenerateError, ScanError};
pub use generate::{GenerateSummary, build_playlist, generate_playlist};
pub use scanner::{scan_collection, scan_files};
pub use settings::{CollectionConfig, Config};

// Re-export the data model so the CLI only needs this crate.
pub use retro_lpl_core::{
    Collection, CollectionKind, FileEntry, PathStyle, PlaylistDescriptor, PlaylistItem,
    PortableRoots,
};
pub use retro_lpl_frontend::{Frontend, RetroArch};
