use thiserror::Error;

use retro_lpl_lib::{ConfigError, ScanError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Directory listing failed
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// One or more playlists could not be written
    #[error("{failed} of {total} playlist(s) failed")]
    Generate { failed: usize, total: usize },

    /// Logger setup failed
    #[error("Logger error: {0}")]
    Logger(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
