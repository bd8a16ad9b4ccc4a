//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod secret_store;
mod shopping_search_port;

pub use secret_store::SecretStorePort;
#[cfg(test)]
pub use shopping_search_port::MockShoppingSearchPort;
pub use shopping_search_port::ShoppingSearchPort;
