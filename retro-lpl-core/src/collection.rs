use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::playlist::{self, DETECT};

/// Filenames never matched against an arcade database (shared BIOS sets).
pub const DEFAULT_DENYLIST: &[&str] = &["neogeo.zip"];

/// How item paths and output locations are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Paths exactly as configured, joined with the host separator.
    #[default]
    Native,
    /// Forward-slash paths rooted at the fixed portable mount points
    /// (Lakka/RetroPie style installs).
    Portable,
}

impl PathStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Portable => "portable",
        }
    }
}

impl std::fmt::Display for PathStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `PathStyle`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path style: '{0}' (expected 'native' or 'portable')")]
pub struct PathStyleParseError(pub String);

impl std::str::FromStr for PathStyle {
    type Err = PathStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "portable" | "lakka" | "rpi" => Ok(Self::Portable),
            _ => Err(PathStyleParseError(s.to_string())),
        }
    }
}

/// Fixed mount points substituted for the configured roots when a collection
/// uses [`PathStyle::Portable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortableRoots {
    /// Root that ROM folders live under on the target device.
    pub source_root: String,
    /// Directory the playlists are written to.
    pub output_dir: PathBuf,
}

impl Default for PortableRoots {
    fn default() -> Self {
        Self {
            source_root: "/storage/roms".to_string(),
            output_dir: PathBuf::from("//LAKKA/Playlists"),
        }
    }
}

/// What kind of playlist a collection produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionKind {
    /// Labels come from the ROM filenames.
    Standard,
    /// Labels come from a descriptive arcade database (MAME/FBNeo `.dat`).
    Arcade {
        dat_file: PathBuf,
        /// Filenames that are never matched, even if present on disk.
        denylist: Vec<String>,
    },
}

/// A named set of ROMs and where its playlist goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Playlist name, following libretro's database naming
    /// (e.g. "Nintendo - Game Boy").
    pub name: String,
    pub source: PathBuf,
    pub output: PathBuf,
    /// Allowed extensions, lowercase without the dot. Empty means no filter.
    pub extensions: Vec<String>,
    /// Default core path written to the playlist header.
    pub core: String,
    pub recursive: bool,
    pub path_style: PathStyle,
    pub kind: CollectionKind,
}

impl Collection {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            output: output.into(),
            extensions: Vec::new(),
            core: DETECT.to_string(),
            recursive: false,
            path_style: PathStyle::Native,
            kind: CollectionKind::Standard,
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn with_core(mut self, core: impl Into<String>) -> Self {
        self.core = core.into();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Turn this into an arcade collection using the default BIOS denylist.
    pub fn arcade(mut self, dat_file: impl Into<PathBuf>) -> Self {
        self.kind = CollectionKind::Arcade {
            dat_file: dat_file.into(),
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        };
        self
    }

    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    /// Toggle the path style before generation.
    pub fn set_path_style(&mut self, style: PathStyle) {
        self.path_style = style;
    }

    pub fn is_arcade(&self) -> bool {
        matches!(self.kind, CollectionKind::Arcade { .. })
    }

    /// `<name>.lpl`, also used as every item's `db_name`.
    pub fn playlist_file_name(&self) -> String {
        playlist::playlist_file_name(&self.name)
    }

    /// Root that item paths are built from.
    ///
    /// Portable style puts the source under the portable source root. A
    /// relative source keeps all its folders; an absolute one keeps only its
    /// last component.
    pub fn source_root(&self, portable: &PortableRoots) -> String {
        match self.path_style {
            PathStyle::Native => self.source.to_string_lossy().into_owned(),
            PathStyle::Portable => {
                let source = self.source.to_string_lossy();
                let tail = if is_absolute_any(&source) {
                    last_component(&source).to_string()
                } else {
                    to_portable(relative_tail(&source))
                };
                format!(
                    "{}/{}",
                    portable.source_root.trim_end_matches(['/', '\\']),
                    tail
                )
            }
        }
    }

    /// Directory the playlist file is written to.
    pub fn output_dir(&self, portable: &PortableRoots) -> PathBuf {
        match self.path_style {
            PathStyle::Native => self.output.clone(),
            PathStyle::Portable => portable.output_dir.clone(),
        }
    }

    /// Join `relative` onto `root` according to the path style.
    pub fn item_path(&self, root: &str, relative: &str) -> String {
        match self.path_style {
            PathStyle::Native => Path::new(root).join(relative).to_string_lossy().into_owned(),
            PathStyle::Portable => to_portable(&format!(
                "{}/{}",
                root.trim_end_matches(['/', '\\']),
                relative
            )),
        }
    }
}

/// Rewrite every backslash separator to a forward slash.
pub fn to_portable(path: &str) -> String {
    path.replace('\\', "/")
}

/// Last path component, accepting either separator regardless of host.
fn last_component(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Absolute on either Unix or Windows: a leading separator or a drive
/// letter.
fn is_absolute_any(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with(['/', '\\'])
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// A relative source without `./` markers or trailing separators.
fn relative_tail(path: &str) -> &str {
    let mut path = path.trim_end_matches(['/', '\\']);
    while let Some(rest) = path.strip_prefix("./").or_else(|| path.strip_prefix(".\\")) {
        path = rest;
    }
    path
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
