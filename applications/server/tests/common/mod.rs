//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use linkshelf_core::UserId;
use linkshelf_server::{create_router, AppState, AuthService};
use linkshelf_storage::SqliteBookmarkStore;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret-key";

/// Router wired to a real SQLite file in a temporary directory
pub struct TestApp {
    pub router: Router,
    pub auth_service: Arc<AuthService>,
    pub store: Arc<SqliteBookmarkStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = linkshelf_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");
        linkshelf_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(SqliteBookmarkStore::new(pool));
        let auth_service =
            Arc::new(AuthService::new(TEST_SECRET, 1).expect("Failed to create auth service"));
        let router = create_router(AppState::new(store.clone(), Arc::clone(&auth_service)));

        Self {
            router,
            auth_service,
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Bearer header value for `user_id`
    pub fn bearer(&self, user_id: &str) -> String {
        let token = self
            .auth_service
            .create_access_token(&UserId::new(user_id))
            .expect("Failed to create token");
        format!("Bearer {}", token)
    }

    pub fn get(&self, uri: &str, user_id: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, self.bearer(user_id))
            .body(Body::empty())
            .unwrap()
    }

    pub fn post_json(&self, uri: &str, user_id: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::AUTHORIZATION, self.bearer(user_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    pub fn delete(&self, uri: &str, user_id: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("DELETE")
            .header(header::AUTHORIZATION, self.bearer(user_id))
            .body(Body::empty())
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
