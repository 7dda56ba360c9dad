/// Bookmark domain types
use crate::error::{BookmarkError, Result};
use crate::types::{BookmarkId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved link owned by exactly one user
///
/// Bookmarks are immutable once created; the only lifecycle transition after
/// creation is deletion by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Server-generated identifier
    pub id: BookmarkId,

    /// Owning user
    pub user_id: UserId,

    /// Target URL
    pub url: String,

    /// Display title
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,
}

/// Input for creating a bookmark
///
/// Carries no identity: the owner comes from the authenticated caller and the
/// id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookmarkData {
    /// Target URL
    pub url: String,

    /// Display title
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateBookmarkData {
    /// Create input with a URL and title
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the payload shape: URL and title must not be blank
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(BookmarkError::validation("url is required"));
        }
        if self.title.trim().is_empty() {
            return Err(BookmarkError::validation("title is required"));
        }
        Ok(())
    }
}
