use std::fs;
use std::path::Path;

use retro_lpl_frontend::read_playlist;
use retro_lpl_lib::{
    Collection, GenerateError, PathStyle, PortableRoots, RetroArch, build_playlist,
    generate_playlist,
};
use tempfile::TempDir;

const MAME_DAT: &str = "clrmamepro (\n\tname \"MAME\"\n)\n\ngame (\n\tname \"Street Fighter II_ The World Warrior\"\n\tyear \"1991\"\n\tdeveloper \"Capcom\"\n\trom ( name sf2.zip size 1 crc 0 )\n)\n\ngame (\n\tname \"Tom &amp; Jerry\"\n\tyear \"1990\"\n\tdeveloper \"Someone\"\n\trom ( name tj.zip size 1 crc 0 )\n)\n\ngame (\n\tname \"Neo-Geo\"\n\tyear \"1990\"\n\tdeveloper \"SNK\"\n\trom ( name neogeo.zip size 1 crc 0 )\n)\n";

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

#[test]
fn standard_collection_round_trips_through_disk() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("Nintendo - Game Boy");
    let output = tmp.path().join("playlists");
    touch(&source.join("Tetris (World).gb"));
    touch(&source.join("Kirby's Dream Land (USA, Europe).gb"));

    let collection = Collection::new("Nintendo - Game Boy", &source, &output);
    let summary =
        generate_playlist(&collection, &PortableRoots::default(), &RetroArch::new()).unwrap();

    assert_eq!(summary.items, 2);
    assert!(summary.missing.is_empty());
    assert_eq!(summary.path, output.join("Nintendo - Game Boy.lpl"));

    let playlist = read_playlist(&summary.path).unwrap();
    assert_eq!(playlist.version, "1.4");
    assert_eq!(playlist.default_core_path, "DETECT");
    let labels: Vec<_> = playlist.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Kirby's Dream Land (USA, Europe)", "Tetris (World)"]);
    assert!(playlist.items.iter().all(|i| i.db_name == "Nintendo - Game Boy.lpl"));
    assert!(
        playlist
            .items
            .iter()
            .all(|i| Path::new(&i.path).starts_with(&source))
    );
}

#[test]
fn recursive_collection_with_filter() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("Sony - PlayStation");
    touch(&source.join("Game A").join("Game A.cue"));
    touch(&source.join("Game A").join("Game A (Track 1).bin"));
    touch(&source.join("Game B.iso"));
    touch(&source.join("notes.txt"));

    let collection = Collection::new("Sony - PlayStation", &source, tmp.path())
        .with_extensions(["cue", "iso"])
        .recursive(true);
    let (playlist, _) = build_playlist(&collection, &PortableRoots::default()).unwrap();

    let labels: Vec<_> = playlist.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.contains(&"Game A"));
    assert!(labels.contains(&"Game B"));
}

#[test]
fn arcade_collection_uses_database_titles() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("Arcade - MAME");
    let dat = tmp.path().join("MAME.dat");
    fs::write(&dat, MAME_DAT).unwrap();
    for name in ["sf2.zip", "tj.zip", "neogeo.zip", "homebrew.zip"] {
        touch(&source.join(name));
    }

    let collection = Collection::new("MAME", &source, tmp.path().join("pl")).arcade(&dat);
    let summary =
        generate_playlist(&collection, &PortableRoots::default(), &RetroArch::new()).unwrap();

    assert_eq!(summary.items, 2);
    assert_eq!(summary.missing, vec!["homebrew.zip", "neogeo.zip"]);

    let playlist = read_playlist(&summary.path).unwrap();
    let labels: Vec<_> = playlist.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Street Fighter II& The World Warrior", "Tom & Jerry"]
    );
}

#[test]
fn arcade_collection_without_database_fails() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("Arcade");
    touch(&source.join("sf2.zip"));

    let collection =
        Collection::new("MAME", &source, tmp.path()).arcade(tmp.path().join("missing.dat"));
    let result = build_playlist(&collection, &PortableRoots::default());
    assert!(matches!(result, Err(GenerateError::Dat(_))));
}

#[test]
fn missing_source_writes_empty_playlist() {
    let tmp = TempDir::new().unwrap();
    let collection = Collection::new("Atari - 7800", tmp.path().join("nope"), tmp.path());
    let summary =
        generate_playlist(&collection, &PortableRoots::default(), &RetroArch::new()).unwrap();

    assert_eq!(summary.items, 0);
    assert!(read_playlist(&summary.path).unwrap().is_empty());
}

#[test]
fn portable_style_rewrites_paths_and_roots() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("Sega - Saturn");
    touch(&source.join("Nights").join("Nights (USA).cue"));

    let portable = PortableRoots {
        source_root: "/storage/roms".to_string(),
        output_dir: tmp.path().join("lakka-playlists"),
    };
    let mut collection = Collection::new("Sega - Saturn", &source, tmp.path().join("native"))
        .with_extensions(["cue"])
        .recursive(true);
    collection.set_path_style(PathStyle::Portable);

    let summary = generate_playlist(&collection, &portable, &RetroArch::new()).unwrap();
    assert_eq!(summary.path, tmp.path().join("lakka-playlists").join("Sega - Saturn.lpl"));
    assert!(!tmp.path().join("native").exists());

    let playlist = read_playlist(&summary.path).unwrap();
    assert_eq!(
        playlist.items[0].path,
        "/storage/roms/Sega - Saturn/Nights/Nights (USA).cue"
    );
    assert!(playlist.items.iter().all(|i| !i.path.contains('\\')));
}
