#![forbid(unsafe_code)]
//! SerpApi shopping integration for PriceScout
//!
//! Queries the SerpApi Google Shopping engine and reshapes its
//! `shopping_results` into flat [`ShoppingResult`] records.
//!
//! # Architecture
//!
//! [`SerpApiClient`] implements the [`ShoppingProvider`] trait. Callers that
//! only need "search this locale for this query" should depend on the trait,
//! which keeps the HTTP client swappable in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_serpapi::{SerpApiClient, SerpApiConfig, ShoppingProvider};
//!
//! let config = SerpApiConfig {
//!     api_key: Some("...".to_string()),
//!     ..Default::default()
//! };
//! let client = SerpApiClient::new(&config)?;
//!
//! let response = client.search("iPhone 16 Pro, 128GB", "US").await?;
//! for result in response.results {
//!     println!("{} - {} ({})", result.title, result.price, result.seller);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;
mod provider;

pub use client::SerpApiClient;
pub use config::SerpApiConfig;
pub use error::SerpApiError;
pub use models::{ShoppingResult, ShoppingSearchResponse};
pub use provider::ShoppingProvider;
