//! Country code value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale code forwarded to the shopping provider (e.g. "US", "DE")
///
/// The code is upper-cased on construction and otherwise passed through
/// uninterpreted: empty or unknown codes are left for the provider to judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, normalizing it to upper case
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    /// Get the normalized code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no code was supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CountryCode {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
