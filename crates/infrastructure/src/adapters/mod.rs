//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod env_secret_store;
mod shopping_search_adapter;

pub use env_secret_store::EnvSecretStore;
pub use shopping_search_adapter::ShoppingSearchAdapter;
