//! Domain layer for PriceScout
//!
//! Contains the product search entities and value objects shared by every
//! other layer. This crate performs no I/O.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
