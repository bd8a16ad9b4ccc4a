//! Shopping search adapter - Implements ShoppingSearchPort using integration_serpapi

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::ShoppingSearchPort;
use async_trait::async_trait;
use domain::entities::{NormalizedProduct, ProductQuery};
use integration_serpapi::{
    SerpApiClient, SerpApiConfig, SerpApiError, ShoppingProvider, ShoppingResult,
};
use tracing::{debug, instrument, warn};

/// Adapter for shopping search backed by SerpApi
pub struct ShoppingSearchAdapter {
    provider: Arc<dyn ShoppingProvider>,
}

impl std::fmt::Debug for ShoppingSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingSearchAdapter")
            .field("provider", &self.provider.provider_name())
            .field("configured", &self.provider.is_configured())
            .finish()
    }
}

impl ShoppingSearchAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &SerpApiConfig) -> Result<Self, ApplicationError> {
        let client = SerpApiClient::new_shared(config).map_err(Self::map_error)?;
        Ok(Self { provider: client })
    }

    /// Create an adapter around an existing provider
    #[must_use]
    pub fn with_provider(provider: Arc<dyn ShoppingProvider>) -> Self {
        Self { provider }
    }

    /// Map integration SerpApi error to application error
    fn map_error(err: SerpApiError) -> ApplicationError {
        match err {
            SerpApiError::ConfigurationError(e) => ApplicationError::Configuration(e),
            SerpApiError::AuthenticationFailed(e) => {
                ApplicationError::Configuration(format!("SerpApi rejected the API key: {e}"))
            },
            SerpApiError::ConnectionFailed(e)
            | SerpApiError::RequestFailed(e)
            | SerpApiError::ServiceUnavailable(e)
            | SerpApiError::ProviderError(e) => ApplicationError::ProviderUnavailable(e),
            SerpApiError::RateLimitExceeded { retry_after_secs } => {
                debug!(retry_after = ?retry_after_secs, "SerpApi rate limited");
                ApplicationError::ProviderUnavailable("SerpApi rate limit exceeded".to_string())
            },
            SerpApiError::Timeout { timeout_secs } => ApplicationError::ProviderUnavailable(
                format!("Request timed out after {timeout_secs}s"),
            ),
            err @ (SerpApiError::ParseError(_) | SerpApiError::MissingField { .. }) => {
                ApplicationError::ProviderResponseInvalid(err.to_string())
            },
        }
    }

    /// Convert integration shopping result to domain product
    fn map_result(result: ShoppingResult) -> NormalizedProduct {
        NormalizedProduct::new(result.title, result.price, result.link, result.seller)
    }
}

#[async_trait]
impl ShoppingSearchPort for ShoppingSearchAdapter {
    #[instrument(skip(self, query), fields(location = %query.location, query_len = query.query.len()))]
    async fn search(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<NormalizedProduct>, ApplicationError> {
        let result = self
            .provider
            .search(&query.query, query.location.as_str())
            .await;

        match result {
            Ok(response) => {
                debug!(
                    results = response.results.len(),
                    provider = %response.provider,
                    search_id = ?response.search_id,
                    "Retrieved shopping results"
                );
                Ok(response.results.into_iter().map(Self::map_result).collect())
            },
            Err(e) => {
                warn!(error = %e, "Shopping search failed");
                Err(Self::map_error(e))
            },
        }
    }

    fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}
