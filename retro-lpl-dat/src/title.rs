//! Title extraction for rom entries.
//!
//! libretro's split DATs put the human-readable title a fixed number of
//! lines above each `rom` line, wrapped in fixed-width markup
//! (`\tname "` ... `"\n`). The layout has changed between DAT releases, so
//! the lookup sits behind [`TitleStrategy`] and the numbers are plain
//! fields on [`OffsetTitle`].

/// How many lines above the rom entry the title line sits.
pub const TITLE_LINE_OFFSET: usize = 3;

/// Characters of markup before the title (`\tname "`).
pub const TITLE_PREFIX_LEN: usize = 7;

/// Characters of markup after the title, counting the line terminator (`"\n`).
pub const TITLE_SUFFIX_LEN: usize = 2;

/// Finds the display title for a rom entry line.
pub trait TitleStrategy {
    /// Title for the rom entry at `marker`, or `None` if the surrounding
    /// lines don't yield a usable title.
    fn title_at(&self, lines: &[String], marker: usize) -> Option<String>;
}

/// Title taken from a line at a fixed offset above the rom entry, with fixed
/// character counts trimmed from both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTitle {
    pub offset: usize,
    pub prefix_len: usize,
    pub suffix_len: usize,
}

impl Default for OffsetTitle {
    fn default() -> Self {
        Self {
            offset: TITLE_LINE_OFFSET,
            prefix_len: TITLE_PREFIX_LEN,
            suffix_len: TITLE_SUFFIX_LEN,
        }
    }
}

impl TitleStrategy for OffsetTitle {
    fn title_at(&self, lines: &[String], marker: usize) -> Option<String> {
        let index = marker.checked_sub(self.offset)?;
        let line = lines.get(index)?;
        let raw = trim_chars(line, self.prefix_len, self.suffix_len)?;
        let title = normalize_title(raw);
        if title.trim().is_empty() {
            None
        } else {
            Some(title)
        }
    }
}

/// Undo escaping artifacts of the DAT format: `_` and `&amp;` both stand
/// for `&`.
///
/// Repeated application returns the same string.
pub fn normalize_title(title: &str) -> String {
    let mut out = title.replace('_', "&");
    while out.contains("&amp;") {
        out = out.replace("&amp;", "&");
    }
    out
}

/// Drop `prefix` chars from the front and `suffix` chars from the back.
/// Counts characters, not bytes. `None` if the line is too short.
fn trim_chars(s: &str, prefix: usize, suffix: usize) -> Option<&str> {
    let count = s.chars().count();
    if count < prefix + suffix {
        return None;
    }
    let byte_at = |n: usize| s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    Some(&s[byte_at(prefix)..byte_at(count - suffix)])
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
