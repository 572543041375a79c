//! Filesystem-backed vault.
//!
//! A vault is a directory tree of notes. Listing respects the configured
//! extensions and exclusion names; hidden entries are always skipped.

use super::{DocumentHandle, DocumentRepository};
use crate::error::VaultError;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Configuration for vault listing.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File extensions to include (e.g., ["md"])
    pub extensions: Vec<String>,
    /// Names to exclude (e.g., [".obsidian", ".trash"])
    pub excludes: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            excludes: vec![".obsidian", ".trash", ".git"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            excludes: config.excludes.clone(),
        }
    }
}

/// Document repository over a directory on disk.
pub struct FsVault {
    root: PathBuf,
    config: ScanConfig,
}

impl FsVault {
    /// Open a vault rooted at `root`.
    pub fn open(root: impl Into<PathBuf>, config: ScanConfig) -> Result<Self, VaultError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(VaultError::InvalidRoot(root));
        }
        Ok(Self { root, config })
    }

    /// Root directory of the vault.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if a file has one of the configured extensions.
    fn matches(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.config.extensions.iter().any(|e| e == ext)
    }

    /// Check if a name matches exclusion patterns.
    fn is_excluded(&self, name: &str) -> bool {
        if name.starts_with('.') {
            return true;
        }
        self.config.excludes.iter().any(|pattern| name == pattern)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        // The root itself may be "." or a hidden directory
        entry.depth() == 0 || !self.is_excluded(&entry.file_name().to_string_lossy())
    }

    /// Check if a path is within the vault root.
    fn is_within_root(&self, path: &Path) -> bool {
        let canonical_root = fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        let canonical_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        canonical_path.starts_with(canonical_root)
    }

    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    fn absolute_path(&self, handle: &DocumentHandle) -> PathBuf {
        self.root.join(&handle.path)
    }
}

#[async_trait]
impl DocumentRepository for FsVault {
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>, VaultError> {
        let mut documents = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.keep_entry(e));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && self.matches(entry.path()) {
                documents.push(DocumentHandle::from_path(self.relative_path(entry.path())));
            }
        }

        debug!(
            "Listed {} documents under {}",
            documents.len(),
            self.root.display()
        );
        Ok(documents)
    }

    async fn get_document(&self, name: &str) -> Result<DocumentHandle, VaultError> {
        let path = self.root.join(name);
        if !path.is_file() || !self.is_within_root(&path) {
            return Err(VaultError::NotFound(name.to_string()));
        }
        Ok(DocumentHandle::from_path(self.relative_path(&path)))
    }

    async fn read_content(&self, handle: &DocumentHandle) -> Result<String, VaultError> {
        let path = self.absolute_path(handle);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| VaultError::io(path, e))
    }

    async fn overwrite_content(
        &self,
        handle: &DocumentHandle,
        text: &str,
    ) -> Result<(), VaultError> {
        let path = self.absolute_path(handle);
        tokio::fs::write(&path, text)
            .await
            .map_err(|e| VaultError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn sample_vault() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.md", "b");
        write(dir.path(), "a.md", "a");
        write(dir.path(), "Projects/Foo/Unsorted.md", "u");
        write(dir.path(), "Projects/readme.txt", "not markdown");
        write(dir.path(), ".obsidian/workspace.md", "hidden");
        write(dir.path(), "node_modules/pkg.md", "excluded");
        dir
    }

    fn open(dir: &TempDir) -> FsVault {
        let config = ScanConfig {
            extensions: vec!["md".to_string()],
            excludes: vec!["node_modules".to_string()],
        };
        FsVault::open(dir.path(), config).unwrap()
    }

    #[tokio::test]
    async fn test_list_documents_sorted_and_filtered() {
        let dir = sample_vault();
        let vault = open(&dir);

        let paths: Vec<_> = vault
            .list_documents()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.path)
            .collect();

        assert_eq!(paths, vec!["Projects/Foo/Unsorted.md", "a.md", "b.md"]);
    }

    #[tokio::test]
    async fn test_get_document() {
        let dir = sample_vault();
        let vault = open(&dir);

        let handle = vault.get_document("Projects/Foo/Unsorted.md").await.unwrap();
        assert_eq!(handle.name, "Unsorted.md");

        let missing = vault.get_document("Open Issues.md").await;
        assert!(matches!(missing, Err(VaultError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_and_overwrite() {
        let dir = sample_vault();
        let vault = open(&dir);
        let handle = vault.get_document("a.md").await.unwrap();

        vault.overwrite_content(&handle, "new text").await.unwrap();
        assert_eq!(vault.read_content(&handle).await.unwrap(), "new text");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = sample_vault();
        let vault = open(&dir);
        let handle = DocumentHandle::from_path("gone.md");

        let err = vault.read_content(&handle).await.unwrap_err();
        assert!(matches!(err, VaultError::Io { .. }));
    }

    #[test]
    fn test_open_rejects_missing_root() {
        let dir = TempDir::new().unwrap();
        let result = FsVault::open(dir.path().join("nope"), ScanConfig::default());
        assert!(matches!(result, Err(VaultError::InvalidRoot(_))));
    }
}
