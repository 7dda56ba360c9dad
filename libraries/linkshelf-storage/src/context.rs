use crate::bookmarks;
use async_trait::async_trait;
use linkshelf_core::{
    error::Result,
    storage::BookmarkStore,
    types::{Bookmark, BookmarkId, CreateBookmarkData, UserId},
};
use sqlx::SqlitePool;

/// Bookmark store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteBookmarkStore {
    pool: SqlitePool,
}

impl SqliteBookmarkStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for SqliteBookmarkStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>> {
        bookmarks::list_by_user(&self.pool, user_id)
            .await
            .map_err(|e| e.into_bookmark_error("Failed to fetch user bookmarks"))
    }

    async fn get_by_id(&self, user_id: &UserId, id: &BookmarkId) -> Result<Option<Bookmark>> {
        bookmarks::get_by_id(&self.pool, user_id, id)
            .await
            .map_err(|e| e.into_bookmark_error("Failed to fetch bookmark"))
    }

    async fn create(&self, user_id: &UserId, data: CreateBookmarkData) -> Result<Bookmark> {
        bookmarks::create(&self.pool, user_id, data)
            .await
            .map_err(|e| e.into_bookmark_error("Failed to create bookmark"))
    }

    async fn delete(&self, user_id: &UserId, id: &BookmarkId) -> Result<()> {
        bookmarks::delete(&self.pool, user_id, id)
            .await
            .map_err(|e| e.into_bookmark_error("Failed to delete bookmark"))
    }
}
