//! Opaque currency identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a currency by its code (e.g. `"EUR"`).
///
/// No format or existence checks are made here. Whether a code is usable is
/// decided by the exchange rate provider that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Wraps a currency code as given.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_kept_verbatim() {
        let code = CurrencyCode::new("eur");
        assert_eq!(code.as_str(), "eur");
        assert_eq!(code.to_string(), "eur");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let code = CurrencyCode::from("HUF");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"HUF\"");

        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
