//! Shopping search port
//!
//! Defines the interface the product search service uses to reach a
//! shopping-search provider.

use async_trait::async_trait;
use domain::{NormalizedProduct, ProductQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for shopping search operations
///
/// Implementations return one [`NormalizedProduct`] per provider listing,
/// in provider order. A provider with nothing to offer yields an empty list,
/// never an error. A listing the implementation cannot reshape fails the
/// whole search; partial lists are never returned.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShoppingSearchPort: Send + Sync {
    /// Search listings for the given query
    async fn search(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<NormalizedProduct>, ApplicationError>;

    /// Whether the backing provider has the credentials it needs
    fn is_configured(&self) -> bool;

    /// Get the name of the backing provider (e.g. "serpapi")
    fn provider_name(&self) -> &str;
}
