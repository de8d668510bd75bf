//! Day-by-day conversion report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::CurrencyCode;

/// Header line that opens every rendered report.
pub const REPORT_HEADER: &str = "Conversion Report:";

/// One converted day of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub date: NaiveDate,
    pub rate: f64,
    pub converted: f64,
}

/// Converted nominal amounts for a currency pair over a date range.
///
/// Entries are kept in the order they were produced, which is chronological
/// when built by the converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    entries: Vec<ReportEntry>,
}

impl ConversionReport {
    /// Creates an empty report for a currency pair.
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            from,
            to,
            entries: Vec::new(),
        }
    }

    /// Appends a converted day.
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the header, a newline, then one converted value per line.
///
/// No newline follows the last value. An empty report renders as the header
/// and a single newline. Values use `f64`'s `Display`, so very large or very
/// small magnitudes print in positional form (`1e22` as
/// `10000000000000000000000`), never in exponent notation.
impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", entry.converted)?;
        }
        Ok(())
    }
}
