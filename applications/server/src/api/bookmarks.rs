/// Bookmarks API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use linkshelf_core::{Bookmark, BookmarkId, CreateBookmarkData};

/// GET /api/bookmarks
/// All of the caller's bookmarks, newest first
pub async fn list_bookmarks(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Bookmark>>> {
    let bookmarks = app_state.store.list_by_user(auth.user_id()).await?;
    tracing::debug!(user_id = %auth.user_id(), count = bookmarks.len(), "Listed bookmarks");
    Ok(Json(bookmarks))
}

/// POST /api/bookmarks
/// Create a bookmark owned by the caller
pub async fn create_bookmark(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    payload: std::result::Result<Json<CreateBookmarkData>, JsonRejection>,
) -> Result<(StatusCode, Json<Bookmark>)> {
    let Json(data) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    data.validate()?;

    let bookmark = app_state.store.create(auth.user_id(), data).await?;
    tracing::info!(user_id = %auth.user_id(), bookmark_id = %bookmark.id, "Bookmark created");

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// DELETE /api/bookmarks/:id
/// Delete one of the caller's bookmarks; 404 if absent or owned by someone else
pub async fn delete_bookmark(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    let bookmark_id = BookmarkId::new(id);

    app_state.store.delete(auth.user_id(), &bookmark_id).await?;
    tracing::info!(user_id = %auth.user_id(), bookmark_id = %bookmark_id, "Bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}
