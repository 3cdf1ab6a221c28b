//! Database layer - connection manager and file stores
//!
//! - One lazily opened pool per process, owned by `ConnectionManager`
//! - `FileStore` trait at the seam between HTTP and persistence
//! - PostgreSQL (JSONB documents) and in-memory implementations

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryFileStore;
pub use pool::{create_pool_with_options, ConnectionManager, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgFileStore;
pub use store::{FileStore, StoreError};
