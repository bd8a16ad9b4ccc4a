//! SerpApi client configuration

use serde::{Deserialize, Serialize};

/// Upper bound SerpApi accepts for the `num` parameter
const MAX_RESULT_LIMIT: u32 = 100;

/// Configuration for the SerpApi shopping client
#[derive(Clone, Serialize, Deserialize)]
pub struct SerpApiConfig {
    /// SerpApi API key (searches fail with a configuration error without it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// SerpApi base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search engine selector
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Result-count hint sent as `num` (a cap, the provider may return fewer)
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SerpApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("engine", &self.engine)
            .field("result_limit", &self.result_limit)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://serpapi.com".to_string()
}

fn default_engine() -> String {
    "google_shopping".to_string()
}

const fn default_result_limit() -> u32 {
    60
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            engine: default_engine(),
            result_limit: default_result_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SerpApiConfig {
    /// Create a configuration for testing against a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some("test-api-key".to_string()),
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.result_limit == 0 || self.result_limit > MAX_RESULT_LIMIT {
            return Err(format!(
                "result_limit must be between 1 and {MAX_RESULT_LIMIT}"
            ));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.engine.trim().is_empty() {
            return Err("engine must not be empty".to_string());
        }

        url::Url::parse(&self.base_url).map_err(|e| format!("base_url is invalid: {e}"))?;

        Ok(())
    }
}
