//! Currency Conversion Service
//!
//! Orchestrates rate lookups through the exchange rate port.
//! Contains NO infrastructure logic - validation and arithmetic only.

use chrono::NaiveDate;

use currency_types::{
    ConversionFailure, ConversionReport, CurrencyCode, CurrencyFetchError, ExchangeRateProvider,
    REPORT_NOMINAL_AMOUNT, ReportEntry, validate_amount, validate_exchange_rate,
};

/// Application service for currency conversions.
///
/// Generic over `P: ExchangeRateProvider` - the rate source is injected at compile time.
/// This enables:
/// - Swapping rate sources without code changes
/// - Testing with scripted providers
/// - Compile-time checks for port implementation
pub struct CurrencyConverter<P: ExchangeRateProvider> {
    provider: P,
}

impl<P: ExchangeRateProvider> CurrencyConverter<P> {
    /// Creates a new converter over the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying rate provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Single Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts `amount` from one currency to another at the provider's rate.
    ///
    /// The amount is checked before the provider is asked for a rate, so a NaN
    /// amount never reaches the provider. No rounding is applied.
    #[tracing::instrument(skip(self, from, to), fields(from = %from, to = %to))]
    pub async fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, CurrencyFetchError> {
        self.try_convert(amount, from, to)
            .await
            .map_err(|failure| {
                tracing::warn!("Conversion failed: {}", failure);
                failure.into()
            })
    }

    async fn try_convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConversionFailure> {
        let amount = validate_amount(amount)?;
        let rate = self.fetch_rate(from, to).await?;
        Ok(amount * rate)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────────

    /// Renders a conversion report for every day from `start` to `end`, inclusive.
    ///
    /// See [`build_conversion_report`](Self::build_conversion_report).
    pub async fn generate_conversion_report(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, CurrencyFetchError> {
        let report = self.build_conversion_report(from, to, start, end).await?;
        Ok(report.to_string())
    }

    /// Converts the fixed nominal amount once per day from `start` to `end`, inclusive.
    ///
    /// Rates are fetched one day at a time in date order. The first failing
    /// day aborts the whole report and later days are not fetched. When
    /// `start` is after `end` the report is empty.
    #[tracing::instrument(skip(self, from, to), fields(from = %from, to = %to))]
    pub async fn build_conversion_report(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ConversionReport, CurrencyFetchError> {
        self.try_build_report(from, to, start, end)
            .await
            .map_err(|failure| {
                tracing::warn!("Conversion report failed: {}", failure);
                failure.into()
            })
    }

    async fn try_build_report(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ConversionReport, ConversionFailure> {
        let mut report = ConversionReport::new(from.clone(), to.clone());
        let mut current = start;

        while current <= end {
            let rate = self.fetch_rate(from, to).await?;
            let converted = REPORT_NOMINAL_AMOUNT * rate;
            tracing::debug!(date = %current, rate, converted, "Converted report day");

            report.push(ReportEntry {
                date: current,
                rate,
                converted,
            });

            // The last representable date has no successor.
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(report)
    }

    /// Asks the provider for one rate and validates it.
    async fn fetch_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConversionFailure> {
        let rate = self.provider.get_exchange_rate(from, to).await?;
        tracing::debug!(?rate, "Fetched exchange rate");
        validate_exchange_rate(rate)
    }
}
