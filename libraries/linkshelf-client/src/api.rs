//! The bookmark API seam used by the controller.

use crate::error::Result;
use async_trait::async_trait;
use linkshelf_core::{Bookmark, BookmarkId, CreateBookmarkData};

/// Remote bookmark operations, scoped to the caller's identity.
///
/// `BookmarkClient` is the HTTP implementation; tests substitute mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkApi: Send + Sync {
    /// Fetch every bookmark the caller owns, newest first.
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>>;

    /// Create a bookmark and return the server's record.
    async fn create_bookmark(&self, data: &CreateBookmarkData) -> Result<Bookmark>;

    /// Delete one of the caller's bookmarks.
    async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()>;
}
