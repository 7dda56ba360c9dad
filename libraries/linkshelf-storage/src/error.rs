/// Storage-specific errors
use linkshelf_core::{BookmarkError, BookmarkId};
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// No bookmark with this id is owned by the acting user
    #[error("Bookmark not found: {0}")]
    NotFound(BookmarkId),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Re-express as a core error with a stable user-facing message
    ///
    /// `NotFound` passes through unchanged. Engine failures are logged with
    /// their original cause and replaced by `message`.
    pub fn into_bookmark_error(self, message: &str) -> BookmarkError {
        match self {
            Self::NotFound(id) => BookmarkError::NotFound(id),
            other => {
                tracing::error!(error = %other, "{}", message);
                BookmarkError::store(message)
            }
        }
    }
}
