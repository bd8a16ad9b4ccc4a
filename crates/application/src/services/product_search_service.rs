//! Product search service
//!
//! Turns the loosely-typed client request (country + query text) into a
//! [`ProductQuery`] and delegates to the shopping search port.

use std::{fmt, sync::Arc};

use domain::{NormalizedProduct, ProductQuery};
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::ShoppingSearchPort};

/// Service answering product searches
pub struct ProductSearchService {
    search_port: Arc<dyn ShoppingSearchPort>,
}

impl fmt::Debug for ProductSearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductSearchService")
            .field("provider", &self.search_port.provider_name())
            .field("configured", &self.search_port.is_configured())
            .finish()
    }
}

impl ProductSearchService {
    /// Create a new product search service
    pub fn new(search_port: Arc<dyn ShoppingSearchPort>) -> Self {
        Self { search_port }
    }

    /// Search products for `query` in `country`
    ///
    /// The country code is upper-cased; the query text is forwarded as is.
    /// Empty inputs are not rejected, they reach the provider unchanged.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn search(
        &self,
        country: &str,
        query: &str,
    ) -> Result<Vec<NormalizedProduct>, ApplicationError> {
        let product_query = ProductQuery::new(query, country);

        if product_query.location.is_empty() || product_query.query.is_empty() {
            debug!(
                location = %product_query.location,
                "Forwarding search with empty input"
            );
        }

        match self.search_port.search(&product_query).await {
            Ok(products) => {
                info!(
                    location = %product_query.location,
                    results = products.len(),
                    "Product search completed"
                );
                Ok(products)
            },
            Err(e) => {
                warn!(location = %product_query.location, error = %e, "Product search failed");
                Err(e)
            },
        }
    }

    /// Whether the provider behind this service is configured
    pub fn is_configured(&self) -> bool {
        self.search_port.is_configured()
    }

    /// Name of the provider behind this service
    pub fn provider_name(&self) -> &str {
        self.search_port.provider_name()
    }
}
