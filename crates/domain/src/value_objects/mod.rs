//! Value Objects - Immutable, identity-less domain primitives

mod country_code;

pub use country_code::CountryCode;
