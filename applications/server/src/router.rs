/// HTTP router
use crate::{api, middleware, services::AuthService, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router, with every route nested under `/api`
pub fn create_router(app_state: AppState) -> Router {
    let auth_service: Arc<AuthService> = Arc::clone(&app_state.auth_service);

    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(api::health::health));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route(
            "/bookmarks",
            get(api::bookmarks::list_bookmarks).post(api::bookmarks::create_bookmark),
        )
        .route("/bookmarks/:id", delete(api::bookmarks::delete_bookmark))
        .layer(axum_middleware::from_fn_with_state(
            auth_service,
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
