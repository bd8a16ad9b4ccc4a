//! Application layer - Use cases and orchestration
//!
//! Defines the ports the product search depends on and the service that
//! turns a raw client request into a provider call.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
