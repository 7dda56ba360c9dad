//! Controller scenarios driven through the real HTTP client against a mock server.

use linkshelf_client::{
    BookmarkClient, BookmarkController, ClientConfig, LoadStatus, ADD_FAILED_MESSAGE,
    DELETE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE,
};
use linkshelf_core::{BookmarkId, CreateBookmarkData};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bookmark_json(id: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "user-1",
        "url": format!("https://example.com/{}", id),
        "title": format!("Bookmark {}", id),
        "createdAt": created_at,
    })
}

async fn mount_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/bookmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn controller_for(server: &MockServer) -> BookmarkController<BookmarkClient> {
    let client = BookmarkClient::new(ClientConfig::with_token(server.uri(), "test-token"))
        .expect("valid client config");
    BookmarkController::new(client)
}

#[tokio::test]
async fn test_mount_loads_bookmarks() {
    let server = MockServer::start().await;
    mount_list(&server, json!([bookmark_json("1", "2024-05-01T10:00:00Z")])).await;

    let controller = controller_for(&server);
    controller.mount().await;

    let state = controller.snapshot().await;
    assert_eq!(state.status, LoadStatus::Loaded);
    assert_eq!(state.bookmarks.len(), 1);
    assert_eq!(state.bookmarks[0].id.as_str(), "1");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_mount_against_failing_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookmarks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.mount().await;

    let state = controller.snapshot().await;
    assert_eq!(state.status, LoadStatus::Failed);
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    assert!(state.bookmarks.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_add_against_failing_backend() {
    let server = MockServer::start().await;
    mount_list(&server, json!([bookmark_json("1", "2024-05-01T10:00:00Z")])).await;
    Mock::given(method("POST"))
        .and(path("/api/bookmarks"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Database error" })))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.mount().await;
    let before = controller.bookmarks().await;

    let result = controller
        .add_bookmark(CreateBookmarkData::new("https://x.com", "X"))
        .await;

    assert!(result.is_err());
    let state = controller.snapshot().await;
    assert_eq!(state.error.as_deref(), Some(ADD_FAILED_MESSAGE));
    assert_eq!(state.bookmarks, before);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_add_prepends_confirmed_bookmark() {
    let server = MockServer::start().await;
    mount_list(&server, json!([bookmark_json("1", "2024-05-01T10:00:00Z")])).await;
    Mock::given(method("POST"))
        .and(path("/api/bookmarks"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(bookmark_json("2", "2024-05-02T10:00:00Z")),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.mount().await;

    let created = controller
        .add_bookmark(CreateBookmarkData::new("https://x.com", "X"))
        .await
        .unwrap();

    let bookmarks = controller.bookmarks().await;
    assert_eq!(bookmarks.len(), 2);
    assert_eq!(bookmarks[0], created);
    assert_eq!(bookmarks[1].id.as_str(), "1");
}

#[tokio::test]
async fn test_delete_success_preserves_order_of_rest() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!([
            bookmark_json("3", "2024-05-03T10:00:00Z"),
            bookmark_json("1", "2024-05-02T10:00:00Z"),
            bookmark_json("2", "2024-05-01T10:00:00Z"),
        ]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/api/bookmarks/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.mount().await;
    let before = controller.bookmarks().await.len();

    controller
        .delete_bookmark(&BookmarkId::new("1"))
        .await
        .unwrap();

    let after = controller.bookmarks().await;
    assert_eq!(after.len(), before - 1);
    let ids: Vec<&str> = after.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[tokio::test]
async fn test_delete_rejected_keeps_bookmark() {
    let server = MockServer::start().await;
    mount_list(&server, json!([bookmark_json("1", "2024-05-01T10:00:00Z")])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/bookmarks/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.mount().await;

    let result = controller.delete_bookmark(&BookmarkId::new("1")).await;

    assert!(result.is_err());
    assert_eq!(controller.bookmarks().await.len(), 1);
    assert_eq!(
        controller.error().await.as_deref(),
        Some(DELETE_FAILED_MESSAGE)
    );
    assert!(!controller.is_loading().await);
}
