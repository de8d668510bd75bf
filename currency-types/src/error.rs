//! Error types for the currency converter.

use crate::ports::ExchangeError;

/// The distinct reasons a conversion can fail.
#[derive(Debug, thiserror::Error)]
pub enum ConversionFailure {
    #[error("Invalid amount input.")]
    InvalidAmount,

    #[error("Unable to fetch exchange rate.")]
    RateUnavailable,

    #[error("Invalid exchange rate.")]
    InvalidRate,

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// The single error kind returned by converter operations.
///
/// Carries the message of the failure that caused it, and that failure as
/// its [`source`](std::error::Error::source).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CurrencyFetchError {
    message: String,
    #[source]
    source: Option<ConversionFailure>,
}

impl CurrencyFetchError {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure this error wraps, if any.
    pub fn cause(&self) -> Option<&ConversionFailure> {
        self.source.as_ref()
    }
}

impl From<ConversionFailure> for CurrencyFetchError {
    fn from(failure: ConversionFailure) -> Self {
        Self {
            message: failure.to_string(),
            source: Some(failure),
        }
    }
}

impl From<ExchangeError> for CurrencyFetchError {
    fn from(err: ExchangeError) -> Self {
        ConversionFailure::from(err).into()
    }
}
