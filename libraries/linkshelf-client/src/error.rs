//! Error types for the Linkshelf client.

use linkshelf_core::{BookmarkError, BookmarkId};
use thiserror::Error;

/// Errors that can occur when talking to a Linkshelf server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server rejected the caller's identity
    #[error("Authentication required")]
    AuthRequired,

    /// Bookmark is absent or not owned by the caller
    #[error("Bookmark not found: {0}")]
    NotFound(BookmarkId),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<ClientError> for BookmarkError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => BookmarkError::NotFound(id),
            other => BookmarkError::network(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
