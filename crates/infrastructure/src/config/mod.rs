//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and log format
//! - `serpapi`: Shopping provider settings
//!
//! Sources are layered: built-in defaults, an optional `config.toml`, then
//! `PRICE_SCOUT_*` environment variables (e.g. `PRICE_SCOUT_SERVER__PORT`).
//! The provider key is resolved last through a [`SecretStorePort`].

mod serpapi;
mod server;

use std::path::Path;

use application::{error::ApplicationError, ports::SecretStorePort};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use serpapi::SerpApiAppConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PRICE_SCOUT";

/// Secret key holding the SerpApi API key
pub const SERPAPI_KEY_SECRET: &str = "serp_api_key";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// SerpApi configuration
    #[serde(default)]
    pub serpapi: SerpApiAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, still honoring environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("serpapi.base_url", "https://serpapi.com")?
            .set_default("serpapi.engine", "google_shopping")?
            .add_source(file)
            // Override with environment variables (e.g., PRICE_SCOUT_SERPAPI__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Resolve secrets from a secret store into the config
    ///
    /// Only populates fields that are currently empty. A key already set in
    /// `config.toml` or through `PRICE_SCOUT_SERPAPI__API_KEY` wins over the
    /// store. A missing secret is not an error: the server starts and every
    /// search reports a configuration error.
    pub async fn resolve_secrets(
        &mut self,
        store: &dyn SecretStorePort,
    ) -> Result<(), ApplicationError> {
        if self.serpapi.has_api_key() {
            debug!("SerpApi API key set in configuration");
            return Ok(());
        }

        match store.get_secret(SERPAPI_KEY_SECRET).await? {
            Some(value) => {
                self.serpapi.api_key = Some(SecretString::from(value));
                info!("Loaded serpapi.api_key from secret store");
            },
            None => warn!(
                secret = SERPAPI_KEY_SECRET,
                "SerpApi API key not found, searches will fail until it is set"
            ),
        }

        Ok(())
    }

    /// Validate settings that would otherwise only fail at request time
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }

        self.serpapi
            .to_serpapi_config()
            .validate()
            .map_err(|e| format!("serpapi: {e}"))
    }
}
