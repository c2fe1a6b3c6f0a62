//! Shared data model for retro-lpl: collections, scanned file entries and
//! the RetroArch playlist descriptor that gets written to disk.

pub mod collection;
pub mod entry;
pub mod playlist;

pub use collection::{Collection, CollectionKind, PathStyle, PathStyleParseError, PortableRoots};
pub use entry::FileEntry;
pub use playlist::{
    DETECT, PLAYLIST_EXTENSION, PLAYLIST_VERSION, PlaylistDescriptor, PlaylistItem, playlist_file_name,
};
