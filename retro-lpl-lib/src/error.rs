use std::path::PathBuf;

use thiserror::Error;

use retro_lpl_dat::DatError;
use retro_lpl_frontend::FrontendError;

/// Errors from listing a source directory.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory does not exist
    #[error("Directory not found: \"{}\"", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory
    #[error("Not a directory: \"{}\"", .0.display())]
    NotADirectory(PathBuf),

    /// Permission denied or any other read failure
    #[error("Failed to read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.into())
        } else {
            Self::Io {
                path: path.into(),
                source,
            }
        }
    }
}

/// Errors that stop a single collection's playlist from being written.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("DAT error: {0}")]
    Dat(#[from] DatError),

    #[error("Write failed: {0}")]
    Frontend(#[from] FrontendError),
}

/// Errors from loading the collection configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
