//! Shopping provider trait

use async_trait::async_trait;

use crate::{SerpApiError, ShoppingSearchResponse};

/// Trait for shopping search backends
#[async_trait]
pub trait ShoppingProvider: Send + Sync {
    /// Search listings for `query` localized to `location`
    ///
    /// Both arguments are forwarded as given. An empty listing set is a
    /// successful response with no results.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or any listing lacks a
    /// required field.
    async fn search(
        &self,
        query: &str,
        location: &str,
    ) -> Result<ShoppingSearchResponse, SerpApiError>;

    /// Whether the provider has the credentials it needs
    fn is_configured(&self) -> bool;

    /// Get the provider name (e.g., "serpapi")
    fn provider_name(&self) -> &'static str;
}
