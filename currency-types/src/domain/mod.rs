//! Domain types for currency conversion.

mod currency;
pub mod rate;
mod report;

pub use currency::CurrencyCode;
pub use rate::{REPORT_NOMINAL_AMOUNT, validate_amount, validate_exchange_rate};
pub use report::{ConversionReport, REPORT_HEADER, ReportEntry};
