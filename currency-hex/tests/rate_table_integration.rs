//! Integration tests for the converter over the in-memory rate table.
//!
//! These exercise the full path from the port trait through the table
//! adapter, including errors raised by the adapter itself.

use chrono::NaiveDate;
use currency_hex::CurrencyConverter;
use currency_types::{ConversionFailure, CurrencyCode, ExchangeError};
use exchange_rates::RateTable;

/// Helper to build a converter with a known EUR/HUF rate.
fn converter() -> CurrencyConverter<RateTable> {
    let table = RateTable::with_defaults()
        .with_pair("EUR", "HUF", 392.0)
        .with_pair("HUF", "EUR", 0.00255);
    CurrencyConverter::new(table)
}

fn code(c: &str) -> CurrencyCode {
    CurrencyCode::from(c)
}

#[tokio::test]
async fn test_round_trip_through_table() {
    let service = converter();

    let huf = service.convert(1.0, &code("EUR"), &code("HUF")).await.unwrap();
    assert_eq!(huf, 392.0);

    let eur = service.convert(huf, &code("HUF"), &code("EUR")).await.unwrap();
    assert_eq!((eur * 100.0).round() / 100.0, 1.0);
}

#[tokio::test]
async fn test_unknown_currency_is_wrapped() {
    let service = converter();

    let err = service
        .convert(10.0, &code("EUR"), &code("XYZ"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Unsupported currency: XYZ");
    assert!(matches!(
        err.cause(),
        Some(ConversionFailure::Exchange(ExchangeError::UnsupportedCurrency(_)))
    ));
}

#[tokio::test]
async fn test_zero_rate_in_table_is_rejected() {
    let service = CurrencyConverter::new(RateTable::new().with_pair("EUR", "HUF", 0.0));

    let err = service
        .convert(10.0, &code("EUR"), &code("HUF"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Unable to fetch exchange rate.");
}

#[tokio::test]
async fn test_report_over_table() {
    let service = converter();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

    let report = service
        .generate_conversion_report(&code("EUR"), &code("HUF"), start, end)
        .await
        .unwrap();

    assert_eq!(report, "Conversion Report:\n39200\n39200\n39200");
}
