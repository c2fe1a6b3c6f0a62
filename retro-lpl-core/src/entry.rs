use std::path::Path;

/// A file discovered under a collection's source directory.
///
/// The path is relative to the source root and uses the platform separator
/// for nested entries (e.g. `Disc 1/game.cue` on Unix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    relative: String,
}

impl FileEntry {
    pub fn new(relative: impl Into<String>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    /// The path relative to the source root.
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// Final path component (the bare filename).
    pub fn file_name(&self) -> &str {
        Path::new(&self.relative)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.relative)
    }

    /// Lowercased final extension segment, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.relative)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Display label: the filename with its final extension segment removed.
    ///
    /// `Game (USA).v1.1.zip` → `Game (USA).v1.1`. Dotfiles and names without
    /// an extension are returned unchanged.
    pub fn label(&self) -> &str {
        Path::new(self.file_name())
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_else(|| self.file_name())
    }

    /// True if the extension is in `allowed` (lowercase, no dot).
    /// An empty allow-list accepts everything.
    pub fn passes_filter(&self, allowed: &[String]) -> bool {
        if allowed.is_empty() {
            return true;
        }
        self.extension()
            .map(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
            .unwrap_or(false)
    }
}

impl std::fmt::Display for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.relative)
    }
}
