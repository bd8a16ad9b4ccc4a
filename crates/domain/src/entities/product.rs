//! Product search entities

use serde::{Deserialize, Serialize};

use crate::value_objects::CountryCode;

/// A product search as requested by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Free-text product query, forwarded unchanged
    pub query: String,

    /// Locale the provider should localize results and currency for
    pub location: CountryCode,
}

impl ProductQuery {
    /// Create a new product query
    pub fn new(query: impl Into<String>, location: impl Into<CountryCode>) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
        }
    }
}

/// Simplified listing returned to clients
///
/// Serialized with the PascalCase keys the web client reads:
/// `ProductName`, `Price`, `Link`, `Seller`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedProduct {
    /// Listing title
    pub product_name: String,

    /// Provider-formatted display price (currency symbol included)
    pub price: String,

    /// Absolute link to the product page
    pub link: String,

    /// Seller or store name
    pub seller: String,
}

impl NormalizedProduct {
    /// Create a new normalized product
    pub fn new(
        product_name: impl Into<String>,
        price: impl Into<String>,
        link: impl Into<String>,
        seller: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            price: price.into(),
            link: link.into(),
            seller: seller.into(),
        }
    }
}
