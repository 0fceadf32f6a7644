use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Input directory does not exist: {0}")]
    MissingInput(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("No read permission for directory {path}: {source}")]
    UnreadableInput {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CombineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Io {
            path: path.into(),
            source,
        }
    }
}
