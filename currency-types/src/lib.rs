//! # Currency Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ConversionReport) and rate validation
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Conversion error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConversionReport, CurrencyCode, REPORT_HEADER, REPORT_NOMINAL_AMOUNT, ReportEntry,
    validate_amount, validate_exchange_rate,
};
pub use error::{ConversionFailure, CurrencyFetchError};
pub use ports::{ExchangeError, ExchangeRateProvider};
