//! SerpApi provider configuration.

use integration_serpapi::SerpApiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// SerpApi shopping provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SerpApiAppConfig {
    /// SerpApi API key (sensitive - uses SecretString)
    ///
    /// Falls back to the `SERP_API_KEY` environment variable when unset.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// SerpApi base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search engine selector
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Result-count hint sent with every search (1-100)
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SerpApiAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiAppConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
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

impl Default for SerpApiAppConfig {
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

impl SerpApiAppConfig {
    /// Check whether a non-empty API key is set
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Convert to `integration_serpapi` config
    #[must_use]
    pub fn to_serpapi_config(&self) -> SerpApiConfig {
        SerpApiConfig {
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_owned()),
            base_url: self.base_url.clone(),
            engine: self.engine.clone(),
            result_limit: self.result_limit,
            timeout_secs: self.timeout_secs,
        }
    }
}
