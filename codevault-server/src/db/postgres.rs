//! PostgreSQL-backed file store
//!
//! Records are kept as JSONB documents keyed by the caller's `id`, so
//! fields the service does not know about survive a round trip.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::pool::ConnectionManager;
use super::store::{FileStore, StoreError};
use crate::models::FileRecord;

/// File store over a lazily connected PostgreSQL pool
#[derive(Debug)]
pub struct PgFileStore {
    connections: ConnectionManager,
}

impl PgFileStore {
    pub fn new(connections: ConnectionManager) -> Self {
        Self { connections }
    }

    pub fn connections(&self) -> &ConnectionManager {
        &self.connections
    }
}

fn decode(document: JsonValue) -> Result<FileRecord, StoreError> {
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl FileStore for PgFileStore {
    async fn list(&self) -> Result<Vec<FileRecord>, StoreError> {
        let pool = self.connections.acquire().await?;

        let rows: Vec<(JsonValue,)> =
            sqlx::query_as("SELECT document FROM files ORDER BY created_at DESC")
                .fetch_all(pool)
                .await?;

        rows.into_iter().map(|(document,)| decode(document)).collect()
    }

    async fn find(&self, id: &str) -> Result<Option<FileRecord>, StoreError> {
        let pool = self.connections.acquire().await?;

        let row: Option<(JsonValue,)> = sqlx::query_as("SELECT document FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        row.map(|(document,)| decode(document)).transpose()
    }

    async fn insert(&self, record: &FileRecord) -> Result<(), StoreError> {
        let pool = self.connections.acquire().await?;
        let document = serde_json::to_value(record)?;

        sqlx::query(
            r#"
            INSERT INTO files (id, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&record.id)
        .bind(&document)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn replace(&self, record: &FileRecord) -> Result<(), StoreError> {
        let pool = self.connections.acquire().await?;
        let document = serde_json::to_value(record)?;

        sqlx::query(
            r#"
            UPDATE files
            SET document = $2, created_at = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(&record.id)
        .bind(&document)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let pool = self.connections.acquire().await?;

        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        let pool = self.connections.acquire().await?;

        let result = sqlx::query("DELETE FROM files").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
