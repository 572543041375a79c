//! Error types shared by the vault and parsing layers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a document repository operation.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("vault root is not a directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("failed to walk vault: {0}")]
    Walk(#[from] walkdir::Error),
}

impl VaultError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VaultError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure to turn a marked line into an issue record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("marked line has no '#' tag: {0:?}")]
    MissingTag(String),
}
