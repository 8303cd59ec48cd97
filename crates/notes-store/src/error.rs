//! Error types for the storage layer.

use notes_core::NoteId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Note not found for the requesting user.
    ///
    /// Raised both when the id does not exist and when the note belongs to
    /// another user; callers must not be able to tell the two apart.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
