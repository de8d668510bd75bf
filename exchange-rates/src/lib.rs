//! In-Memory Exchange Rate Table
//!
//! A rate provider backed by a table of base rates, where each currency is
//! priced against USD, plus optional direct rates for specific pairs.
//! Cross rates are derived through USD unless a direct rate is configured.
//!
//! # Rate file format
//! ```json
//! {
//!     "base": { "USD": 1.0, "EUR": 1.087, "HUF": 0.00277 },
//!     "pairs": [ { "from": "EUR", "to": "HUF", "rate": 392.0 } ]
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::RateTable;
//!
//! let table = RateTable::with_defaults().with_pair("EUR", "HUF", 392.0);
//! assert_eq!(table.rate("eur", "huf").unwrap(), Some(392.0));
//! ```

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use currency_types::{CurrencyCode, ExchangeError, ExchangeRateProvider};

// ─────────────────────────────────────────────────────────────────────────────
// Default Rates
// ─────────────────────────────────────────────────────────────────────────────

/// Value of one unit of each currency in USD.
const DEFAULT_BASE_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 1.087),
    ("GBP", 1.266),
    ("INR", 0.01203),
    ("HUF", 0.00277),
];

// ─────────────────────────────────────────────────────────────────────────────
// Rate File
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RateFile {
    #[serde(default)]
    base: HashMap<String, f64>,
    #[serde(default)]
    pairs: Vec<PairRate>,
}

#[derive(Debug, Deserialize)]
struct PairRate {
    from: String,
    to: String,
    rate: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rate Table
// ─────────────────────────────────────────────────────────────────────────────

/// Exchange rates held in memory.
///
/// Codes are matched case-insensitively. Configured values are returned as
/// they are, so a zero or NaN entry reaches the caller unchanged.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    base: HashMap<String, f64>,
    pairs: HashMap<(String, String), f64>,
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

impl RateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the built-in base rates.
    pub fn with_defaults() -> Self {
        DEFAULT_BASE_RATES
            .iter()
            .fold(Self::new(), |table, &(code, usd)| table.with_base(code, usd))
    }

    /// Sets the USD value of one unit of `code`.
    pub fn with_base(mut self, code: &str, usd_rate: f64) -> Self {
        self.base.insert(normalize(code), usd_rate);
        self
    }

    /// Sets a direct rate for `from -> to`, overriding any derived cross rate.
    pub fn with_pair(mut self, from: &str, to: &str, rate: f64) -> Self {
        self.pairs.insert((normalize(from), normalize(to)), rate);
        self
    }

    /// Parses a table from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ExchangeError> {
        let file: RateFile =
            serde_json::from_str(json).map_err(|e| ExchangeError::InvalidSource(e.to_string()))?;

        let table = file
            .base
            .iter()
            .fold(Self::new(), |table, (code, &usd)| table.with_base(code, usd));

        Ok(file
            .pairs
            .iter()
            .fold(table, |table, p| table.with_pair(&p.from, &p.to, p.rate)))
    }

    /// Reads and parses a JSON rate file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExchangeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ExchangeError::InvalidSource(format!("{}: {}", path.display(), e)))?;
        let table = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            currencies = table.base.len(),
            pairs = table.pairs.len(),
            "Loaded rate table"
        );
        Ok(table)
    }

    /// Currency codes with a base rate or appearing in a direct pair, sorted.
    pub fn currencies(&self) -> Vec<&str> {
        let pair_codes = self
            .pairs
            .keys()
            .flat_map(|(from, to)| [from.as_str(), to.as_str()]);

        self.base
            .keys()
            .map(String::as_str)
            .chain(pair_codes)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Looks up the rate for `from -> to`.
    ///
    /// A direct pair rate wins. Otherwise the rate is derived from both base
    /// rates, and the same currency on both sides is `1.0`.
    pub fn rate(&self, from: &str, to: &str) -> Result<Option<f64>, ExchangeError> {
        let (from, to) = (normalize(from), normalize(to));

        if let Some(&rate) = self.pairs.get(&(from.clone(), to.clone())) {
            return Ok(Some(rate));
        }

        let from_usd = self.base_rate(&from)?;
        let to_usd = self.base_rate(&to)?;

        if from == to {
            return Ok(Some(1.0));
        }

        Ok(Some(from_usd / to_usd))
    }

    fn base_rate(&self, code: &str) -> Result<f64, ExchangeError> {
        self.base
            .get(code)
            .copied()
            .ok_or_else(|| ExchangeError::UnsupportedCurrency(CurrencyCode::new(code)))
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for RateTable {
    async fn get_exchange_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<f64>, ExchangeError> {
        self.rate(from.as_str(), to.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
