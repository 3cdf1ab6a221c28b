//! File store abstraction
//!
//! The router only needs find/insert/replace/delete over one collection.
//! Implementations decide how records are persisted.

use async_trait::async_trait;

use crate::models::FileRecord;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connection string missing from process configuration
    #[error("{variable} is not set")]
    Configuration { variable: &'static str },

    /// Opening the pool (or bootstrapping its schema) failed
    #[error("failed to connect to document store: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A stored document could not be decoded into a file record
    #[error("invalid stored document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Insert of an id that is already stored
    #[error("file '{id}' already exists")]
    DuplicateId { id: String },
}

/// Persistence operations over the file collection
#[async_trait]
pub trait FileStore: Send + Sync {
    /// All records, most recently created first.
    async fn list(&self) -> Result<Vec<FileRecord>, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<FileRecord>, StoreError>;

    /// Insert a new record; an existing `id` is an error, never a second copy.
    async fn insert(&self, record: &FileRecord) -> Result<(), StoreError>;

    /// Replace the record sharing `record.id` wholesale.
    async fn replace(&self, record: &FileRecord) -> Result<(), StoreError>;

    /// Delete one record, returning how many were removed (0 or 1).
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// Delete every record, returning how many were removed.
    async fn clear(&self) -> Result<u64, StoreError>;
}
