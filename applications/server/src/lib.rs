//! Linkshelf Server Library
//!
//! HTTP boundary for the bookmark store: bearer-token authentication and the
//! `/api/bookmarks` routes, backed by `linkshelf-storage`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::auth::AuthService;
pub use state::AppState;
