//! HTTP client for the Linkshelf bookmark API.

use crate::api::BookmarkApi;
use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, ErrorBody};
use async_trait::async_trait;
use linkshelf_core::{Bookmark, BookmarkId, CreateBookmarkData};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the `/api/bookmarks` endpoints.
///
/// Every request carries the configured bearer token; the server derives the
/// caller's identity from it.
///
/// # Example
///
/// ```ignore
/// use linkshelf_client::{BookmarkClient, ClientConfig};
///
/// let client = BookmarkClient::new(ClientConfig::with_token("https://links.example.com", token))?;
/// let bookmarks = client.list_bookmarks().await?;
/// ```
pub struct BookmarkClient {
    http: Client,
    base_url: Url,
    access_token: Arc<RwLock<Option<String>>>,
}

impl BookmarkClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let normalized = config.url.trim_end_matches('/');
        if !normalized.starts_with("http://") && !normalized.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(normalized).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!("{} cannot be a base URL", normalized)));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Linkshelf/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            access_token: Arc::new(RwLock::new(config.access_token)),
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Replace the bearer token (e.g. after the identity provider rotated it).
    pub async fn set_access_token(&self, access_token: Option<String>) {
        *self.access_token.write().await = access_token;
    }

    /// Fetch all of the caller's bookmarks, newest first.
    pub async fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        let url = self.endpoint(&["api", "bookmarks"])?;
        debug!(url = %url, "Fetching bookmarks");

        let response = self.send(self.http.get(url)).await?;
        let response = error_for_status(response).await?;

        let bookmarks: Vec<Bookmark> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse bookmarks response: {}", e))
        })?;

        debug!(count = bookmarks.len(), "Fetched bookmarks");

        Ok(bookmarks)
    }

    /// Create a bookmark; returns the record as stored by the server.
    pub async fn create_bookmark(&self, data: &CreateBookmarkData) -> Result<Bookmark> {
        let url = self.endpoint(&["api", "bookmarks"])?;
        debug!(url = %url, "Creating bookmark");

        let response = self.send(self.http.post(url).json(data)).await?;
        let response = error_for_status(response).await?;

        let bookmark: Bookmark = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse bookmark response: {}", e))
        })?;

        info!(bookmark_id = %bookmark.id, "Bookmark created");

        Ok(bookmark)
    }

    /// Delete one of the caller's bookmarks.
    ///
    /// A 404 means the id does not exist or belongs to someone else.
    pub async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()> {
        let url = self.endpoint(&["api", "bookmarks", id.as_str()])?;
        debug!(url = %url, "Deleting bookmark");

        let response = self.send(self.http.delete(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!(bookmark_id = %id, "Bookmark not found on server");
            return Err(ClientError::NotFound(id.clone()));
        }

        error_for_status(response).await?;

        info!(bookmark_id = %id, "Bookmark deleted");

        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.access_token.read().await.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }
}

#[async_trait]
impl BookmarkApi for BookmarkClient {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        BookmarkClient::list_bookmarks(self).await
    }

    async fn create_bookmark(&self, data: &CreateBookmarkData) -> Result<Bookmark> {
        BookmarkClient::create_bookmark(self, data).await
    }

    async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()> {
        BookmarkClient::delete_bookmark(self, id).await
    }
}

/// Pass 2xx responses through; turn everything else into an error.
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::AuthRequired);
    }

    let error_text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&error_text)
        .map(|body| body.error)
        .unwrap_or(error_text);

    warn!(status = %status, error = %message, "Server rejected request");

    Err(ClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}
