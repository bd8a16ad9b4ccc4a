//! Product search handler

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use domain::NormalizedProduct;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Search request body
///
/// Both fields are optional; absent or `null` values are searched as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Country / locale code, any case (e.g. "us")
    #[serde(default)]
    pub country: Option<String>,
    /// Free-text product query
    #[serde(default)]
    pub query: Option<String>,
}

/// Search response body
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Always true
    pub success: bool,
    /// Products in provider order
    pub results: Vec<NormalizedProduct>,
}

/// Handle a product search request
#[instrument(skip(state, payload))]
pub async fn search_products(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload.inspect_err(|rejection| {
        debug!(error = %rejection, "Rejected search request body");
    })?;

    let country = request.country.unwrap_or_default();
    let query = request.query.unwrap_or_default();

    let results = state.search_service.search(&country, &query).await?;

    Ok(Json(SearchResponse {
        success: true,
        results,
    }))
}
