//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// The set is closed: every adapter failure is folded into one of these
/// kinds so the presentation layer can pick a status per kind.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The service is not set up to reach the provider (missing or rejected credential)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider could not be reached or refused to serve the request
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider answered with a payload that cannot be reshaped
    #[error("Invalid provider response: {0}")]
    ProviderResponseInvalid(String),
}
