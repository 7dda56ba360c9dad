//! Domain types for Linkshelf

mod bookmark;
mod ids;

pub use bookmark::{Bookmark, CreateBookmarkData};
pub use ids::{BookmarkId, UserId};
