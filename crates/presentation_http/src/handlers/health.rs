//! Health check handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: ProviderStatus,
}

/// Status of the shopping provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub name: String,
    pub configured: bool,
}

/// Liveness check
///
/// Always 200 while the server runs; `provider.configured` is false when no
/// API key is set, in which case every search fails.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: ProviderStatus {
            name: state.search_service.provider_name().to_string(),
            configured: state.search_service.is_configured(),
        },
    })
}
