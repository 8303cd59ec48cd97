//! Schema definitions and migration utilities.
//!
//! This module provides embedded SQL schema definitions and utilities
//! for managing database migrations.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the notes schema (001_notes.sql).
pub const NOTES_MIGRATION: &str = include_str!("../../../migrations/001_notes.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Migrations check for existing objects before creating them.
///
/// # Errors
///
/// Returns an error if any migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running notes migration (001_notes.sql)...");
    sqlx::raw_sql(NOTES_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Notes migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_migration_embedded() {
        // Verify the migration SQL is properly embedded
        assert!(NOTES_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(NOTES_MIGRATION.contains("CREATE INDEX IF NOT EXISTS idx_notes_user_updated"));
    }

    #[test]
    fn test_notes_migration_is_idempotent_sql() {
        // Every CREATE in the migration must tolerate re-runs
        for line in NOTES_MIGRATION.lines() {
            let line = line.trim_start();
            if line.starts_with("CREATE") {
                assert!(line.contains("IF NOT EXISTS"), "non-idempotent: {}", line);
            }
        }
    }
}
