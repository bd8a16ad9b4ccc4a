//! Shopping search data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single shopping listing, reduced to the fields PriceScout exposes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingResult {
    /// Listing title
    pub title: String,

    /// Display price exactly as the provider formatted it
    pub price: String,

    /// Absolute product link
    pub link: String,

    /// Seller or store name
    pub seller: String,

    /// Position in the provider's result list (1-indexed)
    pub position: u32,
}

impl ShoppingResult {
    /// Create a new shopping result
    #[must_use]
    pub const fn new(
        title: String,
        price: String,
        link: String,
        seller: String,
        position: u32,
    ) -> Self {
        Self {
            title,
            price,
            link,
            seller,
            position,
        }
    }
}

/// Response from a shopping search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingSearchResponse {
    /// Query as sent to the provider
    pub query: String,

    /// Locale code as sent to the provider
    pub location: String,

    /// Listings in provider order
    pub results: Vec<ShoppingResult>,

    /// Timestamp of the search
    pub timestamp: DateTime<Utc>,

    /// Provider that answered (e.g. "serpapi")
    pub provider: String,

    /// Provider-side search identifier, useful when reporting issues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_id: Option<String>,

    /// Round-trip time of the search in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time_ms: Option<u64>,
}

impl ShoppingSearchResponse {
    /// Create a new search response
    #[must_use]
    pub fn new(
        query: String,
        location: String,
        results: Vec<ShoppingResult>,
        provider: &str,
    ) -> Self {
        Self {
            query,
            location,
            results,
            timestamp: Utc::now(),
            provider: provider.to_string(),
            search_id: None,
            search_time_ms: None,
        }
    }

    /// Check if the response has any results
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}
