//! Router configuration.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{dispatch, health_check, index};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.service.max_body_bytes;

    Router::new()
        // Demo page, and the hash/login tasks it posts back
        .route("/", get(index).post(dispatch))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
