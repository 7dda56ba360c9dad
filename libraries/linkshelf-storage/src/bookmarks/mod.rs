//! Owner-scoped bookmark queries
//!
//! Every statement in this module filters on `user_id`. Lookups by id alone
//! would let one user read or delete another user's bookmarks.

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use linkshelf_core::types::{Bookmark, BookmarkId, CreateBookmarkData, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Get all bookmarks owned by a user, newest first
///
/// Rows with equal timestamps come back in reverse insertion order.
pub async fn list_by_user(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<Bookmark>> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, url, title, description, created_at
        FROM bookmarks
        WHERE user_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let bookmarks = rows
        .iter()
        .map(from_row)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(user_id = %user_id, count = bookmarks.len(), "Listed bookmarks");

    Ok(bookmarks)
}

/// Get a bookmark by ID (with ownership check)
pub async fn get_by_id(
    pool: &SqlitePool,
    user_id: &UserId,
    id: &BookmarkId,
) -> Result<Option<Bookmark>> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, url, title, description, created_at
        FROM bookmarks
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Create a bookmark for a user
///
/// Id and timestamp are assigned here; the returned record is the row as
/// stored.
pub async fn create(
    pool: &SqlitePool,
    user_id: &UserId,
    data: CreateBookmarkData,
) -> Result<Bookmark> {
    let id = BookmarkId::generate();

    let row = sqlx::query(
        r#"
        INSERT INTO bookmarks (id, user_id, url, title, description, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, url, title, description, created_at
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(&data.url)
    .bind(&data.title)
    .bind(&data.description)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let bookmark = from_row(&row)?;

    tracing::debug!(user_id = %user_id, bookmark_id = %bookmark.id, "Created bookmark");

    Ok(bookmark)
}

/// Delete a bookmark owned by a user
///
/// The id and owner predicates live in one statement, so there is no window
/// between the ownership check and the deletion.
///
/// # Errors
///
/// Returns `StorageError::NotFound` when no row matches both the id and the
/// owner. Nothing is deleted in that case.
pub async fn delete(pool: &SqlitePool, user_id: &UserId, id: &BookmarkId) -> Result<()> {
    let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        tracing::warn!(user_id = %user_id, bookmark_id = %id, "Bookmark not found for delete");
        return Err(StorageError::NotFound(id.clone()));
    }

    tracing::debug!(user_id = %user_id, bookmark_id = %id, "Deleted bookmark");

    Ok(())
}

fn from_row(row: &SqliteRow) -> Result<Bookmark> {
    Ok(Bookmark {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        url: row.try_get("url")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}
