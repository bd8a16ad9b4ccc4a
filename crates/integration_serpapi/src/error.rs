//! SerpApi error types

use thiserror::Error;

/// Errors that can occur while querying SerpApi
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Client is misconfigured (e.g. no API key)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to SerpApi failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to SerpApi failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// SerpApi answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// API key was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit or account quota exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// SerpApi reported a failure in the response body
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Response body is not valid JSON of the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A field the reshape depends on is absent
    #[error("{}", missing_field_message(field, *index))]
    MissingField {
        /// Name of the absent field
        field: &'static str,
        /// Zero-based listing index, `None` for top-level fields
        index: Option<usize>,
    },
}

fn missing_field_message(field: &str, index: Option<usize>) -> String {
    match index {
        Some(index) => format!("Missing field '{field}' in shopping result {index}"),
        None => format!("Missing field '{field}' in provider response"),
    }
}

impl SerpApiError {
    /// Returns true if the provider answered but its payload cannot be used
    #[must_use]
    pub const fn is_invalid_response(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::MissingField { .. })
    }
}
