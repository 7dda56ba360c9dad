/// Shared application state
use crate::services::AuthService;
use linkshelf_core::BookmarkStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookmarkStore>, auth_service: Arc<AuthService>) -> Self {
        Self {
            store,
            auth_service,
        }
    }
}
