//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Largest accepted request body
///
/// Oversized bodies fail inside the JSON extractor, so they are answered in
/// the regular error envelope.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Search page
        .route("/", get(handlers::index::index))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Search API
        .route("/api/search", post(handlers::search::search_products))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Attach state
        .with_state(state)
}
