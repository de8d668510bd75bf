//! # Currency Hex
//!
//! Application service layer for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, rate lookups, reports)
//!
//! The service is generic over `P: ExchangeRateProvider`, allowing
//! different rate sources to be injected.

pub mod service;


pub use service::CurrencyConverter;
