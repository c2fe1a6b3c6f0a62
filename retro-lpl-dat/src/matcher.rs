use std::collections::HashSet;
use std::path::Path;

use retro_lpl_core::collection::DEFAULT_DENYLIST;

use crate::dat::rom_entry_filename;
use crate::title::{OffsetTitle, TitleStrategy};

/// A rom entry from the database that was matched to a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    /// ROM filename as written in the database (and on disk).
    pub filename: String,
    /// Display title.
    pub title: String,
    /// Zero-based line index of the rom entry.
    pub line: usize,
}

/// Result of matching scanned files against a database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Accepted matches, in database order.
    pub records: Vec<MetadataRecord>,
    /// Scanned files never matched, in scan order.
    pub missing: Vec<String>,
}

impl MatchReport {
    /// Log the files that could not be resolved, if any.
    pub fn log_missing(&self, collection_name: &str) {
        if !self.missing.is_empty() {
            log::warn!(
                "[-{}] {} | Not found in .dat: {:?}",
                self.missing.len(),
                collection_name,
                self.missing
            );
        }
    }
}

/// Resolves ROM filenames to display titles using an arcade database.
pub struct ArcadeMatcher<S: TitleStrategy = OffsetTitle> {
    strategy: S,
    denylist: HashSet<String>,
}

impl ArcadeMatcher<OffsetTitle> {
    /// Matcher with the default title layout.
    pub fn new<I, T>(denylist: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::with_strategy(OffsetTitle::default(), denylist)
    }
}

impl Default for ArcadeMatcher<OffsetTitle> {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.iter().copied())
    }
}

impl<S: TitleStrategy> ArcadeMatcher<S> {
    pub fn with_strategy<I, T>(strategy: S, denylist: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            strategy,
            denylist: denylist.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_denied(&self, filename: &str) -> bool {
        self.denylist.contains(filename)
    }

    /// Walk the database once and resolve every scanned filename it names.
    ///
    /// The first rom entry for a filename wins; later entries for the same
    /// file (shared ROMs in clone sets) are ignored.
    pub fn match_files(&self, lines: &[String], files: &[String]) -> MatchReport {
        let on_disk: HashSet<&str> = files.iter().map(String::as_str).collect();
        let mut found: HashSet<&str> = HashSet::new();
        let mut records = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let Some(filename) = rom_entry_filename(line) else {
                continue;
            };
            if !on_disk.contains(filename) || self.is_denied(filename) || found.contains(filename) {
                continue;
            }

            let title = self.strategy.title_at(lines, index).unwrap_or_else(|| {
                log::warn!(
                    "No title found for {} at line {}, using filename",
                    filename,
                    index + 1
                );
                fallback_title(filename)
            });

            found.insert(filename);
            records.push(MetadataRecord {
                filename: filename.to_string(),
                title,
                line: index,
            });
        }

        let missing = files
            .iter()
            .filter(|f| !found.contains(f.as_str()))
            .cloned()
            .collect();

        MatchReport { records, missing }
    }
}

fn fallback_title(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_string()
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
