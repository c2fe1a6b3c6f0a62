//! Turns scanned files into playlist items.

use retro_lpl_core::{Collection, FileEntry, PlaylistItem};
use retro_lpl_dat::{ArcadeMatcher, MatchReport};

/// Items for a standard collection: one per file passing the extension
/// filter, labelled with the filename minus its extension.
pub fn build_items(collection: &Collection, root: &str, entries: &[FileEntry]) -> Vec<PlaylistItem> {
    let db_name = collection.playlist_file_name();
    entries
        .iter()
        .filter(|e| e.passes_filter(&collection.extensions))
        .map(|e| {
            PlaylistItem::new(
                collection.item_path(root, e.relative_path()),
                e.label(),
                db_name.clone(),
            )
        })
        .collect()
}

/// Items for an arcade collection, labelled from the database.
///
/// Files the database doesn't know about are left out of the items and
/// listed in the returned report.
pub fn build_arcade_items(
    collection: &Collection,
    root: &str,
    entries: &[FileEntry],
    dat_lines: &[String],
    denylist: &[String],
) -> (Vec<PlaylistItem>, MatchReport) {
    let files: Vec<String> = entries
        .iter()
        .filter(|e| e.passes_filter(&collection.extensions))
        .map(|e| e.relative_path().to_string())
        .collect();

    let matcher = ArcadeMatcher::new(denylist.iter().cloned());
    let report = matcher.match_files(dat_lines, &files);
    report.log_missing(&collection.name);

    let db_name = collection.playlist_file_name();
    let items = report
        .records
        .iter()
        .map(|r| {
            PlaylistItem::new(
                collection.item_path(root, &r.filename),
                r.title.clone(),
                db_name.clone(),
            )
        })
        .collect();

    (items, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retro_lpl_core::PathStyle;
    use retro_lpl_dat::parse_dat_lines;
    use std::path::Path;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|n| FileEntry::new(*n)).collect()
    }

    #[test]
    fn test_standard_labels_and_paths() {
        let collection = Collection::new("Nintendo - Game Boy", "/roms/gb", "/pl");
        let items = build_items(&collection, "/roms/gb", &entries(&["Tetris (World).gb"]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Tetris (World)");
        assert_eq!(
            items[0].path,
            Path::new("/roms/gb").join("Tetris (World).gb").to_string_lossy()
        );
        assert_eq!(items[0].db_name, "Nintendo - Game Boy.lpl");
    }

    #[test]
    fn test_allow_list_filters_items() {
        let collection =
            Collection::new("Sony - PlayStation", "/roms/psx", "/pl").with_extensions(["cue", "iso"]);
        let files = entries(&["a.cue", "a.bin", "b.iso", "c.CUE", "readme.txt"]);
        let items = build_items(&collection, "/roms/psx", &files);

        let expected = files
            .iter()
            .filter(|f| matches!(f.extension().as_deref(), Some("cue" | "iso")))
            .count();
        assert_eq!(items.len(), expected);
        for item in &items {
            let ext = Path::new(&item.path)
                .extension()
                .unwrap()
                .to_string_lossy()
                .to_lowercase();
            assert!(collection.extensions.contains(&ext));
        }
    }

    #[test]
    fn test_empty_allow_list_keeps_everything() {
        let collection = Collection::new("x", "/r", "/pl");
        let files = entries(&["a.cue", "b", "c.txt"]);
        assert_eq!(build_items(&collection, "/r", &files).len(), 3);
    }

    #[test]
    fn test_labels_never_keep_extension() {
        let collection = Collection::new("x", "/r", "/pl");
        let items = build_items(&collection, "/r", &entries(&["Game (USA).sfc", "Other.smc"]));
        assert!(items.iter().all(|i| !i.label.ends_with(".sfc") && !i.label.ends_with(".smc")));
    }

    #[test]
    fn test_portable_paths() {
        let collection =
            Collection::new("x", r"G:\Games\SNES", "/pl").with_path_style(PathStyle::Portable);
        let items = build_items(
            &collection,
            "/storage/roms/SNES",
            &entries(&[r"Hacks\Game (Hack).sfc"]),
        );
        assert_eq!(items[0].path, "/storage/roms/SNES/Hacks/Game (Hack).sfc");
    }

    #[test]
    fn test_arcade_items() {
        let dat = "game (\n\tname \"Metal Slug _ Super Vehicle-001\"\n\tyear \"1996\"\n\tdeveloper \"Nazca\"\n\trom ( name mslug.zip size 1 crc 0 )\n)\n";
        let lines = parse_dat_lines(dat);
        let collection = Collection::new("FBNeo - Arcade Games", "/roms/fbneo", "/pl")
            .arcade("fbneo.dat");
        let (items, report) = build_arcade_items(
            &collection,
            "/roms/fbneo",
            &entries(&["mslug.zip", "unknown.zip"]),
            &lines,
            &["neogeo.zip".to_string()],
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Metal Slug & Super Vehicle-001");
        assert_eq!(
            items[0].path,
            Path::new("/roms/fbneo").join("mslug.zip").to_string_lossy()
        );
        assert_eq!(items[0].db_name, "FBNeo - Arcade Games.lpl");
        assert_eq!(report.missing, vec!["unknown.zip"]);
    }
}
