//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, rate tables, mock providers, etc.

use std::sync::Arc;

use crate::CurrencyCode;

/// Error type for exchange rate operations.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(CurrencyCode),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Rate not available for {0} -> {1}")]
    RateNotAvailable(CurrencyCode, CurrencyCode),

    #[error("Invalid rate source: {0}")]
    InvalidSource(String),
}

/// Port trait for exchange rate providers.
///
/// Providers only look rates up. Whether a returned rate is usable (present,
/// non-zero, a finite number) is decided by the caller.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Get the exchange rate from one currency to another.
    /// Returns how many units of `to` currency you get for 1 unit of `from` currency,
    /// or `None` when the source has no value for the pair.
    async fn get_exchange_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<f64>, ExchangeError>;
}

#[async_trait::async_trait]
impl<P: ExchangeRateProvider + ?Sized> ExchangeRateProvider for Box<P> {
    async fn get_exchange_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<f64>, ExchangeError> {
        (**self).get_exchange_rate(from, to).await
    }
}

#[async_trait::async_trait]
impl<P: ExchangeRateProvider + ?Sized> ExchangeRateProvider for Arc<P> {
    async fn get_exchange_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<f64>, ExchangeError> {
        (**self).get_exchange_rate(from, to).await
    }
}
