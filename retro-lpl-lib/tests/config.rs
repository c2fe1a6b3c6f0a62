use std::path::Path;

use retro_lpl_lib::CollectionKind;
use retro_lpl_lib::settings::load_config;

#[test]
fn example_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("collections.example.toml");
    let config = load_config(&path).unwrap();
    let collections = config.collections().unwrap();

    assert!(!collections.is_empty());
    assert_eq!(config.portable.source_root, "/storage/roms");

    let arcade: Vec<_> = collections.iter().filter(|c| c.is_arcade()).collect();
    assert_eq!(arcade.len(), 2);
    for collection in arcade {
        if let CollectionKind::Arcade { denylist, .. } = &collection.kind {
            assert!(denylist.contains(&"neogeo.zip".to_string()));
        }
    }

    let saturn = collections
        .iter()
        .find(|c| c.name == "Sega - Saturn")
        .unwrap();
    assert!(saturn.recursive);
    assert_eq!(saturn.extensions, vec!["cue", "iso"]);
}
