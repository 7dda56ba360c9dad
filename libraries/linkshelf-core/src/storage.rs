//! Storage trait for bookmark persistence

use crate::error::Result;
use crate::types::{Bookmark, BookmarkId, CreateBookmarkData, UserId};
use async_trait::async_trait;

/// Owner-scoped bookmark persistence
///
/// Every operation takes the acting user and must only ever observe or
/// mutate that user's records.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks owned by `user_id`, newest first
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>>;

    /// A single bookmark, if it exists and is owned by `user_id`
    async fn get_by_id(&self, user_id: &UserId, id: &BookmarkId) -> Result<Option<Bookmark>>;

    /// Persist a new bookmark for `user_id` and return the stored record
    async fn create(&self, user_id: &UserId, data: CreateBookmarkData) -> Result<Bookmark>;

    /// Delete a bookmark owned by `user_id`
    ///
    /// # Errors
    /// Returns `BookmarkError::NotFound` when no bookmark with this id is
    /// owned by `user_id`; nothing is deleted in that case.
    async fn delete(&self, user_id: &UserId, id: &BookmarkId) -> Result<()>;
}
