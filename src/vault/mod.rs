//! Document repository abstraction.
//!
//! The collector never talks to storage directly. Everything it needs
//! from the note store (listing, lookup, reading, overwriting) goes
//! through [`DocumentRepository`].

pub mod fs;
#[cfg(test)]
pub mod memory;

pub use fs::{FsVault, ScanConfig};

use crate::error::VaultError;
use async_trait::async_trait;

/// Identity of a document inside a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    /// Path relative to the repository root, `/`-separated.
    pub path: String,
    /// File name including extension.
    pub name: String,
    /// File name without extension.
    pub basename: String,
}

impl DocumentHandle {
    /// Build a handle from a repository-relative path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        let basename = match name.rfind('.') {
            Some(idx) if idx > 0 => name[..idx].to_string(),
            _ => name.clone(),
        };

        Self {
            path,
            name,
            basename,
        }
    }
}

/// Capability set of a document store.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// List every document, in a stable enumeration order.
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>, VaultError>;

    /// Look up a document by repository-relative path.
    async fn get_document(&self, name: &str) -> Result<DocumentHandle, VaultError>;

    /// Read the full text of a document.
    async fn read_content(&self, handle: &DocumentHandle) -> Result<String, VaultError>;

    /// Replace the full text of a document.
    async fn overwrite_content(&self, handle: &DocumentHandle, text: &str)
        -> Result<(), VaultError>;
}
