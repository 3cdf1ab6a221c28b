//! In-memory file store
//!
//! Used by tests and `codevault serve --memory`. Contents vanish with the
//! process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{FileStore, StoreError};
use crate::models::FileRecord;

#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RwLock<Vec<FileRecord>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn list(&self) -> Result<Vec<FileRecord>, StoreError> {
        let mut files = self.files.read().await.clone();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    async fn find(&self, id: &str) -> Result<Option<FileRecord>, StoreError> {
        let files = self.files.read().await;
        Ok(files.iter().find(|f| f.id == id).cloned())
    }

    async fn insert(&self, record: &FileRecord) -> Result<(), StoreError> {
        let mut files = self.files.write().await;
        if files.iter().any(|f| f.id == record.id) {
            return Err(StoreError::DuplicateId {
                id: record.id.clone(),
            });
        }
        files.push(record.clone());
        Ok(())
    }

    async fn replace(&self, record: &FileRecord) -> Result<(), StoreError> {
        let mut files = self.files.write().await;
        if let Some(slot) = files.iter_mut().find(|f| f.id == record.id) {
            *slot = record.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut files = self.files.write().await;
        let before = files.len();
        files.retain(|f| f.id != id);
        Ok((before - files.len()) as u64)
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        let mut files = self.files.write().await;
        let removed = files.len() as u64;
        files.clear();
        Ok(removed)
    }
}
