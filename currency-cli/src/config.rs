//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Default)]
pub struct Config {
    pub rates_file: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub precision: Option<usize>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads configuration through a variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let rates_file = var("CURRENCY_RATES_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = var("CURRENCY_LOG").filter(|v| !v.trim().is_empty());

        let precision = var("CURRENCY_PRECISION")
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.trim().parse().map_err(|_| {
                    anyhow::anyhow!("CURRENCY_PRECISION must be a non-negative integer, got {v:?}")
                })
            })
            .transpose()?;

        Ok(Self {
            rates_file,
            log_filter,
            precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert!(config.rates_file.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.precision.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_vars(vars(&[
            ("CURRENCY_RATES_FILE", "/etc/rates.json"),
            ("CURRENCY_LOG", "debug"),
            ("CURRENCY_PRECISION", "2"),
        ]))
        .unwrap();

        assert_eq!(config.rates_file, Some(PathBuf::from("/etc/rates.json")));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.precision, Some(2));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_vars(vars(&[
            ("CURRENCY_RATES_FILE", "  "),
            ("CURRENCY_LOG", ""),
            ("CURRENCY_PRECISION", "  "),
        ]))
        .unwrap();
        assert!(config.rates_file.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.precision.is_none());
    }

    #[test]
    fn test_bad_precision_fails() {
        let result = Config::from_vars(vars(&[("CURRENCY_PRECISION", "two")]));
        assert!(result.is_err());
    }
}
