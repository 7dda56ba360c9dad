//! Linkshelf Core
//!
//! Platform-agnostic core types, traits, and error handling for Linkshelf.
//!
//! This crate provides the building blocks shared by the storage layer,
//! the HTTP server, and the client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Bookmark`, `CreateBookmarkData`, `UserId`, `BookmarkId`
//! - **Core Traits**: `BookmarkStore`
//! - **Error Handling**: Unified `BookmarkError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use linkshelf_core::types::{CreateBookmarkData, UserId};
//!
//! let owner = UserId::new("user-1");
//! let data = CreateBookmarkData::new("https://www.rust-lang.org", "Rust")
//!     .with_description("The Rust programming language");
//!
//! assert!(data.validate().is_ok());
//! assert_eq!(owner.as_str(), "user-1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{BookmarkError, Result};
pub use storage::BookmarkStore;
pub use types::{Bookmark, BookmarkId, CreateBookmarkData, UserId};
