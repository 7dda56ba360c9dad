//! Client-side bookmark list controller.
//!
//! Holds the in-memory bookmark list for one UI session and reconciles it
//! with server responses. The list is never the source of truth: it is
//! replaced wholesale on load and patched incrementally on create/delete.

use crate::api::BookmarkApi;
use crate::error::{ClientError, Result};
use linkshelf_core::{Bookmark, BookmarkId, CreateBookmarkData};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Message shown when the initial load or a refresh fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch bookmarks";
/// Message shown when creating a bookmark fails.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add bookmark";
/// Message shown when deleting a bookmark fails.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete bookmark";
/// Message shown when a failure cannot be attributed to the server's answer.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Where the list is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Not mounted yet
    #[default]
    Idle,
    /// A fetch-all is in flight
    Loading,
    /// The last fetch-all succeeded
    Loaded,
    /// The last fetch-all failed
    Failed,
}

/// Snapshot of the controller's state, as rendered by a UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkState {
    /// Bookmarks, newest first
    pub bookmarks: Vec<Bookmark>,
    /// A fetch-all is in flight; mutations only ever clear it
    pub loading: bool,
    /// User-facing message for the most recent failure
    pub error: Option<String>,
    /// Outcome of the most recent fetch-all
    pub status: LoadStatus,
}

/// Stateful coordinator between a UI and the bookmark API.
///
/// Operations are not serialized against each other. The state lock is only
/// taken for in-memory transitions, never across a network call, and every
/// update is applied to the state current at that moment: a create prepends,
/// a delete filters. Concurrent operations therefore all land; only ordering
/// between racing updates is last-write-wins.
pub struct BookmarkController<A> {
    api: A,
    state: RwLock<BookmarkState>,
}

impl<A: BookmarkApi> BookmarkController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(BookmarkState::default()),
        }
    }

    /// Initial load. Equivalent to [`refresh`](Self::refresh).
    pub async fn mount(&self) {
        self.refresh().await;
    }

    /// Fetch all bookmarks and replace the list wholesale.
    ///
    /// On failure the previous list is kept and `error` is set.
    pub async fn refresh(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
            state.status = LoadStatus::Loading;
        }

        let result = self.api.list_bookmarks().await;

        let mut state = self.state.write().await;
        match result {
            Ok(bookmarks) => {
                debug!(count = bookmarks.len(), "Bookmarks loaded");
                state.bookmarks = bookmarks;
                state.error = None;
                state.status = LoadStatus::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load bookmarks");
                state.error = Some(failure_message(&e, FETCH_FAILED_MESSAGE));
                state.status = LoadStatus::Failed;
            }
        }
        state.loading = false;
    }

    /// Create a bookmark and prepend the server's record to the list.
    ///
    /// The new item only appears once the server has confirmed it. On
    /// failure nothing is added, `error` is set, and the error is also
    /// returned so the caller can react (e.g. keep a form open).
    pub async fn add_bookmark(&self, data: CreateBookmarkData) -> Result<Bookmark> {
        self.state.write().await.error = None;

        let result = self.api.create_bookmark(&data).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(bookmark) => {
                state.bookmarks.insert(0, bookmark.clone());
                Ok(bookmark)
            }
            Err(e) => {
                warn!(error = %e, "Failed to add bookmark");
                state.error = Some(failure_message(&e, ADD_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Delete a bookmark, removing it from the list once the server agrees.
    ///
    /// There is no optimistic removal: on failure the list is untouched.
    pub async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()> {
        self.state.write().await.error = None;

        let result = self.api.delete_bookmark(id).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(()) => {
                state.bookmarks.retain(|b| &b.id != id);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, bookmark_id = %id, "Failed to delete bookmark");
                state.error = Some(failure_message(&e, DELETE_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Current state, cloned for rendering.
    pub async fn snapshot(&self) -> BookmarkState {
        self.state.read().await.clone()
    }

    pub async fn bookmarks(&self) -> Vec<Bookmark> {
        self.state.read().await.bookmarks.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}

/// Reduce an error to the text shown in the UI.
///
/// Rejections and transport failures map to the operation's message; an
/// answer the client could not decode maps to the generic fallback.
fn failure_message(err: &ClientError, operation_message: &str) -> String {
    match err {
        ClientError::ParseError(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        _ => operation_message.to_string(),
    }
}
