//! Application state shared across handlers

use std::sync::Arc;

use application::ProductSearchService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Product search service
    pub search_service: Arc<ProductSearchService>,
}

impl AppState {
    /// Create state around an already-built search service
    #[must_use]
    pub const fn new(search_service: Arc<ProductSearchService>) -> Self {
        Self { search_service }
    }
}
