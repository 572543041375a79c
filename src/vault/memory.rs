//! In-memory vault for tests.

use super::{DocumentHandle, DocumentRepository};
use crate::error::VaultError;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::sync::Mutex;

/// Document repository holding its documents in memory.
///
/// Documents are listed in insertion order. Paths registered with
/// [`MemoryVault::fail_reads_of`] return an I/O error when read.
#[derive(Default)]
pub struct MemoryVault {
    order: Vec<String>,
    documents: Mutex<BTreeMap<String, String>>,
    failing: HashSet<String>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        self.order.push(path.to_string());
        self.documents
            .get_mut()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        self
    }

    pub fn fail_reads_of(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.documents.lock().unwrap().get(path).cloned()
    }
}

#[async_trait]
impl DocumentRepository for MemoryVault {
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>, VaultError> {
        Ok(self
            .order
            .iter()
            .map(|p| DocumentHandle::from_path(p.as_str()))
            .collect())
    }

    async fn get_document(&self, name: &str) -> Result<DocumentHandle, VaultError> {
        if self.documents.lock().unwrap().contains_key(name) {
            Ok(DocumentHandle::from_path(name))
        } else {
            Err(VaultError::NotFound(name.to_string()))
        }
    }

    async fn read_content(&self, handle: &DocumentHandle) -> Result<String, VaultError> {
        if self.failing.contains(&handle.path) {
            return Err(VaultError::io(
                &handle.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "read refused"),
            ));
        }
        self.documents
            .lock()
            .unwrap()
            .get(&handle.path)
            .cloned()
            .ok_or_else(|| VaultError::NotFound(handle.path.clone()))
    }

    async fn overwrite_content(
        &self,
        handle: &DocumentHandle,
        text: &str,
    ) -> Result<(), VaultError> {
        self.documents
            .lock()
            .unwrap()
            .insert(handle.path.clone(), text.to_string());
        Ok(())
    }
}
