//! Database connection management
//!
//! The pool is opened on first use and kept for the life of the process.
//! A failed attempt is not remembered, so the next request retries.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use super::schema;
use super::store::StoreError;
use crate::config::DATABASE_URL_VAR;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Lazily-initialised handle to the PostgreSQL pool.
///
/// Concurrent first calls to [`acquire`](Self::acquire) wait on a single
/// initialisation instead of racing to open separate pools.
#[derive(Debug)]
pub struct ConnectionManager {
    database_url: Option<String>,
    max_connections: u32,
    pool: OnceCell<PgPool>,
}

impl ConnectionManager {
    /// Create a manager; nothing connects until the first `acquire`.
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            pool: OnceCell::new(),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Return the pool, connecting on the first call.
    ///
    /// # Errors
    ///
    /// `StoreError::Configuration` when no connection string was supplied,
    /// `StoreError::Connection` when the pool cannot be opened.
    pub async fn acquire(&self) -> Result<&PgPool, StoreError> {
        self.pool.get_or_try_init(|| self.connect()).await
    }

    /// Whether a pool has been opened and cached.
    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    async fn connect(&self) -> Result<PgPool, StoreError> {
        let url = self
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(StoreError::Configuration {
                variable: DATABASE_URL_VAR,
            })?;

        let pool = create_pool_with_options(url, self.max_connections)
            .await
            .map_err(StoreError::Connection)?;

        schema::ensure(&pool).await.map_err(StoreError::Connection)?;

        tracing::info!(
            max_connections = self.max_connections,
            "Document store connected"
        );
        Ok(pool)
    }
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
