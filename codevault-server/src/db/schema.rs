//! Table bootstrap for the file collection
//!
//! Idempotent `IF NOT EXISTS` statements run once per pool. There is no
//! versioned migration history.

use sqlx::PgPool;

/// Create the `files` table and its ordering index if absent
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::debug!("Ensuring files table exists");

    // `document` holds the full record as sent back to clients;
    // the timestamp columns mirror it for ordering.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS files (
            id TEXT PRIMARY KEY,
            document JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_files_created_at ON files (created_at DESC)")
        .execute(pool)
        .await?;

    Ok(())
}
