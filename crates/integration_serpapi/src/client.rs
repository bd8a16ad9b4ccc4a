//! SerpApi Google Shopping client
//!
//! Client for the SerpApi search endpoint (<https://serpapi.com/google-shopping-api>).

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::{
    ShoppingSearchResponse, config::SerpApiConfig, error::SerpApiError, models::ShoppingResult,
    provider::ShoppingProvider,
};

/// Text SerpApi puts in `error` when Google had nothing for the query
const EMPTY_RESULTS_MARKER: &str = "hasn't returned any results";

/// SerpApi response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        pub shopping_results: Option<Vec<ShoppingListing>>,
        pub error: Option<String>,
        pub search_metadata: Option<SearchMetadata>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchMetadata {
        pub id: Option<String>,
    }

    /// Only the fields the reshape reads; everything else is ignored
    #[derive(Debug, Deserialize)]
    pub struct ShoppingListing {
        pub title: Option<String>,
        pub price: Option<String>,
        pub product_link: Option<String>,
        pub source: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorBody {
        pub error: Option<String>,
    }
}

/// SerpApi shopping search client
pub struct SerpApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    engine: String,
    result_limit: u32,
    timeout_secs: u64,
}

impl std::fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("engine", &self.engine)
            .field("result_limit", &self.result_limit)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl SerpApiClient {
    /// Create a new SerpApi client
    ///
    /// A missing API key is accepted here so the service can start; every
    /// search then fails with [`SerpApiError::ConfigurationError`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &SerpApiConfig) -> Result<Self, SerpApiError> {
        config.validate().map_err(SerpApiError::ConfigurationError)?;

        if !config.has_api_key() {
            warn!("No SerpApi API key configured, searches will fail");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("price-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SerpApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            engine: config.engine.clone(),
            result_limit: config.result_limit,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be initialized.
    pub fn new_shared(config: &SerpApiConfig) -> Result<Arc<Self>, SerpApiError> {
        Ok(Arc::new(Self::new(config)?))
    }

    fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url)
    }

    /// Map a transport failure, dropping the URL since it carries the API key
    fn map_transport_error(&self, e: reqwest::Error) -> SerpApiError {
        if e.is_timeout() {
            SerpApiError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else if e.is_connect() {
            SerpApiError::ConnectionFailed(e.without_url().to_string())
        } else {
            SerpApiError::RequestFailed(e.without_url().to_string())
        }
    }

    /// Turn a non-success status into an error, preferring SerpApi's own message
    async fn status_error(response: reqwest::Response) -> SerpApiError {
        let status = response.status();

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok());

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<api::ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("HTTP {status}: {body}"));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SerpApiError::AuthenticationFailed(message)
            },
            StatusCode::TOO_MANY_REQUESTS => SerpApiError::RateLimitExceeded {
                retry_after_secs: retry_after,
            },
            s if s.is_server_error() => SerpApiError::ServiceUnavailable(message),
            _ => SerpApiError::RequestFailed(message),
        }
    }

    /// Reshape the provider payload, failing on the first incomplete listing
    fn convert_results(response: api::SearchResponse) -> Result<Vec<ShoppingResult>, SerpApiError> {
        let Some(listings) = response.shopping_results else {
            return match response.error {
                Some(message) if message.contains(EMPTY_RESULTS_MARKER) => Ok(Vec::new()),
                Some(message) => Err(SerpApiError::ProviderError(message)),
                None => Err(SerpApiError::MissingField {
                    field: "shopping_results",
                    index: None,
                }),
            };
        };

        listings
            .into_iter()
            .enumerate()
            .map(|(index, listing)| Self::convert_listing(index, listing))
            .collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn convert_listing(
        index: usize,
        listing: api::ShoppingListing,
    ) -> Result<ShoppingResult, SerpApiError> {
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or(SerpApiError::MissingField {
                field,
                index: Some(index),
            })
        };

        Ok(ShoppingResult::new(
            require(listing.title, "title")?,
            require(listing.price, "price")?,
            require(listing.product_link, "product_link")?,
            require(listing.source, "source")?,
            (index + 1) as u32,
        ))
    }
}

#[async_trait]
impl ShoppingProvider for SerpApiClient {
    #[instrument(skip(self), fields(provider = "serpapi", engine = %self.engine))]
    async fn search(
        &self,
        query: &str,
        location: &str,
    ) -> Result<ShoppingSearchResponse, SerpApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            SerpApiError::ConfigurationError("SerpApi API key is not configured".to_string())
        })?;

        let num = self.result_limit.to_string();
        let start = Instant::now();

        debug!(
            result_limit = self.result_limit,
            "Sending SerpApi shopping request"
        );

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("gl", location),
                ("num", num.as_str()),
                ("api_key", api_key),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        debug!(status = %status, "Received SerpApi response");

        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }

        let api_response: api::SearchResponse = response
            .json()
            .await
            .map_err(|e| {
                // The client timeout also covers reading the body
                if e.is_timeout() {
                    self.map_transport_error(e)
                } else {
                    SerpApiError::ParseError(e.without_url().to_string())
                }
            })?;

        let search_id = api_response
            .search_metadata
            .as_ref()
            .and_then(|m| m.id.clone());
        let results = Self::convert_results(api_response)?;
        let elapsed = start.elapsed();

        let mut response = ShoppingSearchResponse::new(
            query.to_string(),
            location.to_string(),
            results,
            "serpapi",
        );
        response.search_id = search_id;
        #[allow(clippy::cast_possible_truncation)]
        {
            response.search_time_ms = Some(elapsed.as_millis() as u64);
        }

        debug!(
            results = response.results.len(),
            time_ms = elapsed.as_millis(),
            "SerpApi shopping search completed"
        );

        Ok(response)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn provider_name(&self) -> &'static str {
        "serpapi"
    }
}
