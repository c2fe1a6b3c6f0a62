use super::*;
use crate::dat::parse_dat_lines;

/// Block layout as shipped in libretro's `metadat/mame-split` DATs.
const KNOWN_GOOD_BLOCK: &str = "game (\n\tname \"Puzzle Bobble (Japan, B-System)\"\n\tyear \"1994\"\n\tdeveloper \"Taito\"\n\trom ( name pbobble.zip size 1 crc 00000000 )\n)\n";

#[test]
fn test_default_constants_match_known_layout() {
    let lines = parse_dat_lines(KNOWN_GOOD_BLOCK);
    let marker = lines.iter().position(|l| l.starts_with("\trom")).unwrap();
    assert_eq!(marker, 4);

    let title = OffsetTitle::default().title_at(&lines, marker);
    assert_eq!(title.as_deref(), Some("Puzzle Bobble (Japan, B-System)"));
}

#[test]
fn test_default_values() {
    let strategy = OffsetTitle::default();
    assert_eq!(strategy.offset, 3);
    assert_eq!(strategy.prefix_len, 7);
    assert_eq!(strategy.suffix_len, 2);
}

#[test]
fn test_custom_offset() {
    let text = "game (\n\tname \"Metal Slug\"\n\trom ( name mslug.zip )\n)\n";
    let lines = parse_dat_lines(text);
    let strategy = OffsetTitle {
        offset: 1,
        ..OffsetTitle::default()
    };
    assert_eq!(strategy.title_at(&lines, 2).as_deref(), Some("Metal Slug"));
}

#[test]
fn test_marker_too_close_to_start() {
    let lines = parse_dat_lines("\tname \"A\"\n\trom ( name a.zip )\n");
    assert_eq!(OffsetTitle::default().title_at(&lines, 1), None);
}

#[test]
fn test_line_too_short() {
    let lines = parse_dat_lines("x\ny\nz\n\trom ( name a.zip )\n");
    assert_eq!(OffsetTitle::default().title_at(&lines, 3), None);
}

#[test]
fn test_empty_title_is_none() {
    let lines = parse_dat_lines("\tname \"\"\na\nb\n\trom ( name a.zip )\n");
    assert_eq!(OffsetTitle::default().title_at(&lines, 3), None);
}

#[test]
fn test_trim_counts_chars_not_bytes() {
    let lines = parse_dat_lines("\tname \"Pokémon Ōkoku\"\na\nb\n\trom ( name p.zip )\n");
    assert_eq!(
        OffsetTitle::default().title_at(&lines, 3).as_deref(),
        Some("Pokémon Ōkoku")
    );
}

#[test]
fn test_normalize_underscore() {
    assert_eq!(normalize_title("Cadillacs _ Dinosaurs"), "Cadillacs & Dinosaurs");
}

#[test]
fn test_normalize_amp_entity() {
    assert_eq!(normalize_title("Tom &amp; Jerry"), "Tom & Jerry");
    assert_eq!(normalize_title("A &amp;amp; B"), "A & B");
}

#[test]
fn test_normalize_is_idempotent() {
    for input in [
        "Cadillacs _ Dinosaurs",
        "Tom &amp; Jerry",
        "_amp; &amp;amp; __",
        "Plain Title",
    ] {
        let once = normalize_title(input);
        assert_eq!(normalize_title(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn test_title_is_normalized() {
    let lines = parse_dat_lines("\tname \"Cadillacs _ Dinosaurs &amp; Friends\"\na\nb\n\trom ( name dino.zip )\n");
    assert_eq!(
        OffsetTitle::default().title_at(&lines, 3).as_deref(),
        Some("Cadillacs & Dinosaurs & Friends")
    );
}
