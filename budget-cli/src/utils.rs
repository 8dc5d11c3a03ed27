use budget_core::FilingStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Error returned when a string is not a known filing status.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid filing status '{0}' (expected single or married)")]
pub struct ParseFilingStatusError(String);

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0, which the engine then
/// rejects as a non-positive amount.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses `single` or `married`, ignoring case.
pub fn parse_filing_status(s: &str) -> Result<FilingStatus, ParseFilingStatusError> {
    FilingStatus::parse(s).ok_or_else(|| ParseFilingStatusError(s.to_string()))
}
