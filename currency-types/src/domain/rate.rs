//! Validation rules shared by every conversion.

use crate::error::ConversionFailure;

/// Amount converted for each day of a conversion report.
pub const REPORT_NOMINAL_AMOUNT: f64 = 100.0;

/// Rejects amounts that are not a number. Sign and magnitude are not checked.
pub fn validate_amount(amount: f64) -> Result<f64, ConversionFailure> {
    if amount.is_nan() {
        return Err(ConversionFailure::InvalidAmount);
    }
    Ok(amount)
}

/// Checks a rate returned by a provider and returns it if usable.
///
/// An absent or zero rate means the provider could not supply one. A rate
/// that is NaN or infinite is present but unusable.
pub fn validate_exchange_rate(rate: Option<f64>) -> Result<f64, ConversionFailure> {
    match rate {
        None => Err(ConversionFailure::RateUnavailable),
        Some(r) if r == 0.0 => Err(ConversionFailure::RateUnavailable),
        Some(r) if !r.is_finite() => Err(ConversionFailure::InvalidRate),
        Some(r) => Ok(r),
    }
}
