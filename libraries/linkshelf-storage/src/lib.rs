//! Linkshelf Storage
//!
//! Multi-user `SQLite` persistence for bookmarks.
//!
//! # Architecture
//!
//! - **Owner-scoped**: every query carries the acting user's id as a predicate
//! - **Vertical Slicing**: each feature owns its own queries and logic
//! - **Trait boundary**: `SqliteBookmarkStore` implements
//!   `linkshelf_core::BookmarkStore` so callers never depend on `SQLite` directly
//!
//! # Example
//!
//! ```rust,no_run
//! use linkshelf_storage::{create_pool, run_migrations, SqliteBookmarkStore};
//! use linkshelf_core::{BookmarkStore, UserId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://linkshelf.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteBookmarkStore::new(pool);
//! let bookmarks = store.list_by_user(&UserId::new("user-1")).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod bookmarks;

pub use context::SqliteBookmarkStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://linkshelf.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("SQLite pool created");

    Ok(pool)
}
