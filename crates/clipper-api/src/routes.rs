//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{create_clips, health};
use crate::middleware::{cors, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_clips))
        .route("/health", get(health))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        // CORS is outermost so preflights stop before routing
        .layer(middleware::from_fn_with_state(state.clone(), cors))
        .with_state(state)
}
