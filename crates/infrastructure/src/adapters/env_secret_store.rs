//! Environment-based secret store adapter
//!
//! Reads secrets from environment variables. Useful for local development
//! and containerized deployments where secrets are injected via environment.

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument};

/// Secret store that reads from environment variables
///
/// Keys are transformed to uppercase with slashes replaced by underscores.
/// For example: "serp_api_key" becomes "SERP_API_KEY". When the transformed
/// variable is unset, the key itself is tried verbatim, so both
/// `SERP_API_KEY` and `serp_api_key` are honored.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    /// Optional prefix for all environment variable lookups
    prefix: Option<String>,
}

impl EnvSecretStore {
    /// Create a new environment secret store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a prefix for all environment variable lookups
    ///
    /// # Example
    /// ```
    /// use infrastructure::adapters::EnvSecretStore;
    ///
    /// let store = EnvSecretStore::with_prefix("PRICE_SCOUT");
    /// // Looking up "serp_api_key" will check "PRICE_SCOUT_SERP_API_KEY"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Transform a key path to an environment variable name
    ///
    /// Converts slashes to underscores, hyphens to underscores, and uppercases.
    fn key_to_env_var(&self, key: &str) -> String {
        let normalized = key.replace(['/', '-'], "_").to_uppercase();

        match &self.prefix {
            Some(prefix) => format!("{prefix}_{normalized}"),
            None => normalized,
        }
    }

    fn read_var(name: &str) -> Result<Option<String>, ApplicationError> {
        match env::var(name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "Secret contains invalid UTF-8: {name}"
            ))),
        }
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self), fields(env_var))]
    async fn get_secret(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let env_var = self.key_to_env_var(key);
        tracing::Span::current().record("env_var", &env_var);

        if let Some(value) = Self::read_var(&env_var)? {
            debug!("Retrieved secret from environment variable");
            return Ok(Some(value));
        }

        if env_var != key {
            if let Some(value) = Self::read_var(key)? {
                debug!(env_var = %key, "Retrieved secret from verbatim environment variable");
                return Ok(Some(value));
            }
        }

        debug!("Secret not set in environment");
        Ok(None)
    }
}
