//! Line-level access to libretro "metadat" arcade databases.
//!
//! These are ClrMamePro-style text files where every game block carries a
//! tab-indented `rom ( name <file> ... )` line:
//!
//! ```text
//! game (
//! 	name "Puzzle Bobble (Japan, B-System)"
//! 	year "1994"
//! 	developer "Taito"
//! 	rom ( name pbobble.zip size 123 crc 00000000 )
//! )
//! ```
//!
//! The matcher works on raw lines rather than a parsed tree because titles
//! are located by their position relative to the `rom` line.

use std::path::Path;

use crate::error::DatError;

/// Read a database file into lines.
///
/// Invalid UTF-8 is replaced rather than rejected; these files come from
/// many sources and a few carry stray Latin-1 bytes.
pub fn load_dat_lines(path: &Path) -> Result<Vec<String>, DatError> {
    let bytes = std::fs::read(path).map_err(|e| DatError::read(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    log::debug!("Loaded DAT {} ({} bytes)", path.display(), bytes.len());
    Ok(parse_dat_lines(&text))
}

/// Split database text into lines, each terminated by exactly one `\n`.
///
/// CRLF endings are normalized and a missing final terminator is added, so
/// fixed-width trims behave the same on every line.
pub fn parse_dat_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| {
            let body = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line);
            format!("{body}\n")
        })
        .collect()
}

/// If `line` is a rom entry marker, return the ROM filename it names.
///
/// A marker is indented by exactly one tab and starts with the `rom` token;
/// the filename is the fourth whitespace-separated token
/// (`rom`, `(`, `name`, `<file>`).
pub fn rom_entry_filename(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('\t')?;
    if !rest.starts_with("rom") {
        return None;
    }
    let mut tokens = rest.split_whitespace();
    if tokens.next()? != "rom" {
        return None;
    }
    tokens.nth(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_entry_filename() {
        assert_eq!(
            rom_entry_filename("\trom ( name pbobble.zip size 1 crc 00000000 )\n"),
            Some("pbobble.zip")
        );
    }

    #[test]
    fn test_rom_entry_requires_single_tab() {
        assert_eq!(rom_entry_filename("rom ( name a.zip )"), None);
        assert_eq!(rom_entry_filename("\t\trom ( name a.zip )"), None);
        assert_eq!(rom_entry_filename("    rom ( name a.zip )"), None);
    }

    #[test]
    fn test_rom_entry_requires_rom_token() {
        assert_eq!(rom_entry_filename("\tromset ( name a.zip )"), None);
        assert_eq!(rom_entry_filename("\tname \"rom\"\n"), None);
    }

    #[test]
    fn test_short_rom_line() {
        assert_eq!(rom_entry_filename("\trom ( name\n"), None);
    }

    #[test]
    fn test_parse_dat_lines_normalizes_endings() {
        let lines = parse_dat_lines("game (\r\n\tname \"A\"\r\n)");
        assert_eq!(lines, vec!["game (\n", "\tname \"A\"\n", ")\n"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dat_lines(&dir.path().join("nope.dat")).unwrap_err();
        assert!(matches!(err, DatError::NotFound(_)));
    }
}
