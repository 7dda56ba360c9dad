/// Core error types for Linkshelf
use thiserror::Error;

use crate::types::BookmarkId;

/// Result type alias using `BookmarkError`
pub type Result<T> = std::result::Result<T, BookmarkError>;

/// Core error type for Linkshelf
///
/// Every variant carries a message that is safe to show to a user. Causes
/// coming from the persistence engine or the network are logged where they
/// are converted, not carried here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// Bookmark is absent or owned by someone else
    #[error("Bookmark not found: {0}")]
    NotFound(BookmarkId),

    /// Malformed create payload
    #[error("Invalid bookmark: {0}")]
    Validation(String),

    /// Persistence engine failure
    #[error("{0}")]
    Store(String),

    /// Client-to-server call failed
    #[error("{0}")]
    Network(String),
}

impl BookmarkError {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Whether the caller can correct this error (as opposed to an infrastructure failure)
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}
