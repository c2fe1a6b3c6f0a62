//! Scan → match/build → write, for one collection at a time.

use std::path::PathBuf;

use retro_lpl_core::{Collection, CollectionKind, PlaylistDescriptor, PortableRoots};
use retro_lpl_dat::load_dat_lines;
use retro_lpl_frontend::Frontend;

use crate::builder::{build_arcade_items, build_items};
use crate::error::GenerateError;
use crate::scanner::scan_collection;

/// Outcome of generating one playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub name: String,
    /// Items written to the playlist.
    pub items: usize,
    /// Arcade files that were not found in the database.
    pub missing: Vec<String>,
    /// Playlist file that was written.
    pub path: PathBuf,
}

/// Build the playlist for a collection without writing it.
///
/// Returns the descriptor and the list of unresolved arcade files (always
/// empty for standard collections).
pub fn build_playlist(
    collection: &Collection,
    portable: &PortableRoots,
) -> Result<(PlaylistDescriptor, Vec<String>), GenerateError> {
    let entries = scan_collection(collection);
    let root = collection.source_root(portable);

    let (items, missing) = match &collection.kind {
        CollectionKind::Standard => (build_items(collection, &root, &entries), Vec::new()),
        CollectionKind::Arcade { dat_file, denylist } => {
            let lines = load_dat_lines(dat_file)?;
            let (items, report) = build_arcade_items(collection, &root, &entries, &lines, denylist);
            (items, report.missing)
        }
    };

    log::info!("[{}] {}", items.len(), collection.name);
    Ok((PlaylistDescriptor::for_collection(collection, items), missing))
}

/// Build a collection's playlist and write it through `frontend`.
pub fn generate_playlist(
    collection: &Collection,
    portable: &PortableRoots,
    frontend: &dyn Frontend,
) -> Result<GenerateSummary, GenerateError> {
    let (descriptor, missing) = build_playlist(collection, portable)?;
    let output_dir = collection.output_dir(portable);
    let path = frontend.write_playlist(&descriptor, &collection.name, &output_dir)?;
    log::debug!("Wrote {}", path.display());

    Ok(GenerateSummary {
        name: collection.name.clone(),
        items: descriptor.len(),
        missing,
        path,
    })
}
