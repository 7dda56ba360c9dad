//! Linkshelf Client
//!
//! HTTP client for the Linkshelf bookmark API plus the stateful controller a
//! UI uses to render and mutate the signed-in user's bookmark list.
//!
//! # Features
//!
//! - **BookmarkClient**: list, create and delete bookmarks over HTTP
//! - **BookmarkController**: in-memory list state with loading/error flags,
//!   reconciled against server responses
//!
//! # Example
//!
//! ```ignore
//! use linkshelf_client::{BookmarkClient, BookmarkController, ClientConfig};
//! use linkshelf_core::CreateBookmarkData;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BookmarkClient::new(ClientConfig::with_token(
//!         "https://links.example.com",
//!         "token-from-identity-provider",
//!     ))?;
//!
//!     let controller = BookmarkController::new(client);
//!     controller.mount().await;
//!
//!     controller
//!         .add_bookmark(CreateBookmarkData::new("https://www.rust-lang.org", "Rust"))
//!         .await?;
//!
//!     for bookmark in controller.bookmarks().await {
//!         println!("{} - {}", bookmark.title, bookmark.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod controller;
mod error;
mod types;

// Re-export main types
pub use api::BookmarkApi;
pub use client::BookmarkClient;
pub use controller::{
    BookmarkController, BookmarkState, LoadStatus, ADD_FAILED_MESSAGE, DELETE_FAILED_MESSAGE,
    FALLBACK_ERROR_MESSAGE, FETCH_FAILED_MESSAGE,
};
pub use error::{ClientError, Result};
pub use types::ClientConfig;
