//! API error handling
//!
//! Every failure leaves the API in the same envelope the search page reads:
//! `{"success": false, "error": <message>, "code": <kind>}`. Failures are
//! told apart by `code`. Everything except an unreachable provider (503)
//! answers 500, malformed request bodies included.

use application::ApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be read as a search request
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// Server-side configuration problem (e.g. missing or rejected API key)
    #[error("{0}")]
    Configuration(String),

    /// Provider answered with a payload that cannot be used
    #[error("{0}")]
    InvalidProviderResponse(String),

    /// Provider could not be reached or refused to serve the request
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::Configuration(_)
            | Self::InvalidProviderResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::Configuration(_) => "configuration_error",
            Self::InvalidProviderResponse(_) => "provider_response_invalid",
            Self::ServiceUnavailable(_) => "provider_unavailable",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::InvalidRequest(_) => {
                warn!(code = self.code(), error = %self, "Rejected request");
            },
            _ => error!(status = %status, code = self.code(), error = %self, "Request failed"),
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::Configuration(_) => Self::Configuration(message),
            ApplicationError::ProviderUnavailable(_) => Self::ServiceUnavailable(message),
            ApplicationError::ProviderResponseInvalid(_) => Self::InvalidProviderResponse(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_converts_to_500() {
        let err: ApiError =
            ApplicationError::Configuration("SerpApi API key is not configured".to_string())
                .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "configuration_error");
        assert_eq!(
            err.to_string(),
            "Configuration error: SerpApi API key is not configured"
        );
    }

    #[test]
    fn provider_unavailable_converts_to_503() {
        let err: ApiError = ApplicationError::ProviderUnavailable("HTTP 503".to_string()).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "provider_unavailable");
    }

    #[test]
    fn invalid_response_converts_to_500() {
        let err: ApiError = ApplicationError::ProviderResponseInvalid(
            "Missing field 'price' in shopping result 0".to_string(),
        )
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "provider_response_invalid");
        assert!(err.to_string().contains("Missing field 'price'"));
    }

    #[test]
    fn invalid_request_is_500() {
        let err = ApiError::InvalidRequest("expected value at line 1 column 1".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "invalid_request");
        assert!(err.to_string().starts_with("Invalid request body"));
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            success: false,
            error: "Provider unavailable: HTTP 503".to_string(),
            code: "provider_unavailable".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "Provider unavailable: HTTP 503",
                "code": "provider_unavailable"
            })
        );
    }

    #[test]
    fn into_response_uses_status() {
        let response = ApiError::ServiceUnavailable("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
