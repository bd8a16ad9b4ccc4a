//! PriceScout HTTP presentation layer
//!
//! This crate provides the HTTP API and the search page for PriceScout.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestIdLayer, cors_layer};
pub use routes::create_router;
pub use state::AppState;
