//! codevault-server: file record service over a document store
//!
//! Persists and retrieves file records (id, name, content, timestamps)
//! behind a single `/api/files` endpoint supporting list, upsert, and
//! delete of one or all records.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, ServerConfig};
pub use db::{ConnectionManager, FileStore, MemoryFileStore, PgFileStore, StoreError};
pub use http::{build_router, run_server, AppState};
pub use models::{FileRecord, NewFile, ValidationError};
