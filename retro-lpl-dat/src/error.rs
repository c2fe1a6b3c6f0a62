use std::path::PathBuf;

/// Errors that can occur while loading an arcade database.
#[derive(Debug, thiserror::Error)]
pub enum DatError {
    #[error("failed to read DAT file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DAT file {} does not exist", .0.display())]
    NotFound(PathBuf),
}

impl DatError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.into())
        } else {
            Self::Read {
                path: path.into(),
                source,
            }
        }
    }
}
