use anyhow::{Context, Error, Result};
use csv::StringRecord;
use rust_decimal::Decimal;

/// Index of a named column in a CSV header, or a recoverable error naming
/// the column the caller can fix and retry.
pub fn required_column(headers: &StringRecord, name: &str, file_kind: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::msg(format!("{} is missing required column '{}'", file_kind, name)))
}

/// Parses a monetary cell. Spreadsheet exports carry `$` and thousands
/// separators, and leave cells empty instead of writing zero.
pub fn parse_decimal(field: &str, field_name: &str, row_idx: usize) -> Result<Decimal> {
    let cleaned: String = field
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    cleaned.parse::<Decimal>().with_context(|| {
        format!("Failed to parse {} '{}' at row {}", field_name, field, row_idx + 1)
    })
}
