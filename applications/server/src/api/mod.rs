/// API route modules
pub mod bookmarks;
pub mod health;
