//! Collection configuration.
//!
//! Collections are defined in a TOML file, by default
//! `~/.config/retro-lpl/collections.toml`:
//!
//! ```toml
//! playlist_dir = "/home/me/.config/retroarch/playlists"
//!
//! [[collection]]
//! name = "Sony - PlayStation"
//! source = "/games/Sony - PlayStation"
//! extensions = ["cue", "iso"]
//! recursive = true
//!
//! [[collection]]
//! name = "MAME"
//! source = "/games/Arcade - MAME"
//! dat_file = "MAME 0.233 - Split.dat"
//! path_style = "portable"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use retro_lpl_core::collection::DEFAULT_DENYLIST;
use retro_lpl_core::{Collection, CollectionKind, DETECT, PathStyle, PortableRoots};

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "collections.toml";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output directory for collections that don't set their own.
    pub playlist_dir: Option<PathBuf>,
    /// Default root for the `tree` listing.
    pub tree_root: Option<PathBuf>,
    #[serde(default)]
    pub portable: PortableRoots,
    #[serde(default, rename = "collection")]
    pub collections: Vec<CollectionConfig>,
    /// Directory relative `dat_file` paths resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// One `[[collection]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    pub name: String,
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub extensions: Vec<String>,
    pub core: Option<String>,
    #[serde(default)]
    pub recursive: bool,
    /// Shorthand for `path_style = "portable"`.
    #[serde(default)]
    pub portable: bool,
    /// `native` or `portable` (also `lakka`, `rpi`). Takes precedence over
    /// `portable`.
    pub path_style: Option<String>,
    /// Arcade database; its presence makes this an arcade collection.
    pub dat_file: Option<PathBuf>,
    pub denylist: Option<Vec<String>>,
}

/// Canonical config location: `~/.config/retro-lpl/collections.toml`.
pub fn config_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("retro-lpl").join(CONFIG_FILE_NAME)
}

/// Resolve the config file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `collections.toml` in the user config directory, if it exists
/// 3. `collections.toml` in the current working directory
pub fn resolve_config_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    let user = config_path();
    if user.exists() {
        return user;
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    parse_config(&contents, path, base_dir)
}

/// Parse config text. `path` is only used in error messages.
pub fn parse_config(contents: &str, path: &Path, base_dir: PathBuf) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.base_dir = base_dir;
    Ok(config)
}

impl Config {
    /// Build the collection list, in file order.
    pub fn collections(&self) -> Result<Vec<Collection>, ConfigError> {
        let mut seen = HashSet::new();
        let mut collections = Vec::with_capacity(self.collections.len());

        for entry in &self.collections {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::invalid("collection with an empty name"));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate collection name \"{}\"",
                    entry.name
                )));
            }
            collections.push(self.build_collection(entry)?);
        }

        Ok(collections)
    }

    fn build_collection(&self, entry: &CollectionConfig) -> Result<Collection, ConfigError> {
        let output = entry
            .output
            .clone()
            .or_else(|| self.playlist_dir.clone())
            .ok_or_else(|| {
                ConfigError::invalid(format!(
                    "collection \"{}\" has no output and no playlist_dir is set",
                    entry.name
                ))
            })?;

        let style = match &entry.path_style {
            Some(style) => style.parse::<PathStyle>().map_err(|e| {
                ConfigError::invalid(format!("collection \"{}\": {}", entry.name, e))
            })?,
            None if entry.portable => PathStyle::Portable,
            None => PathStyle::Native,
        };

        let mut collection = Collection::new(&entry.name, &entry.source, output)
            .with_extensions(&entry.extensions)
            .with_core(entry.core.clone().unwrap_or_else(|| DETECT.to_string()))
            .recursive(entry.recursive)
            .with_path_style(style);

        if let Some(dat_file) = &entry.dat_file {
            let denylist = entry
                .denylist
                .clone()
                .unwrap_or_else(|| DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect());
            collection.kind = CollectionKind::Arcade {
                dat_file: self.base_dir.join(dat_file),
                denylist,
            };
        } else if entry.denylist.is_some() {
            log::warn!(
                "Collection \"{}\" sets a denylist but no dat_file; ignoring it",
                entry.name
            );
        }

        Ok(collection)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
