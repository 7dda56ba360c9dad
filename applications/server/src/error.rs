/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use linkshelf_core::BookmarkError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Bookmark(#[from] BookmarkError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(msg) => {
                tracing::warn!("Authentication failed: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Bookmark(err) => match err {
                BookmarkError::NotFound(ref id) => {
                    tracing::warn!(bookmark_id = %id, "Bookmark not found");
                    (StatusCode::NOT_FOUND, "Bookmark not found".to_string())
                }
                BookmarkError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                // Already logged with its cause where it was converted
                BookmarkError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
                BookmarkError::Network(ref msg) => {
                    tracing::error!("Upstream error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkshelf_core::BookmarkId;

    fn status_of(err: ServerError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_bookmark_errors_map_to_status_codes() {
        assert_eq!(
            status_of(BookmarkError::NotFound(BookmarkId::new("x")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(BookmarkError::validation("url is required").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BookmarkError::store("Failed to create bookmark").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_is_server_error() {
        assert_eq!(
            status_of(ServerError::Internal("token expiry overflows".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert_eq!(
            status_of(ServerError::Auth("missing header".into())),
            StatusCode::UNAUTHORIZED
        );
    }
}
