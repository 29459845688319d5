use std::fs;

use anyhow::{Context, Error, Result};
use csv::ReaderBuilder;

use crate::{
    data::utils::{parse_decimal, required_column},
    models::HoldingsExportRecord,
};

/// Whale Wisdom exports put this many metadata rows above the real header.
pub const EXPORT_METADATA_ROWS: usize = 3;

pub fn read_holdings_export(path: &str) -> Result<Vec<HoldingsExportRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to open holdings export at path: {}", path))?;
    parse_holdings_export(&raw)
}

/// Parses the export body below the metadata rows. Empty market-value
/// cells stay missing here; the join decides what missing means.
pub fn parse_holdings_export(raw: &str) -> Result<Vec<HoldingsExportRecord>> {
    let body = raw
        .splitn(EXPORT_METADATA_ROWS + 1, '\n')
        .nth(EXPORT_METADATA_ROWS)
        .ok_or_else(|| Error::msg("Holdings export ended before the header row"))?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let symbol_idx = required_column(&headers, "Symbol", "Holdings export")?;
    let value_idx = required_column(&headers, "Market Value", "Holdings export")?;

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let rec = record
            .with_context(|| format!("Failed to read holdings export at row {}", row_idx + 1))?;

        let symbol = rec.get(symbol_idx).unwrap_or("").trim().to_string();
        let value_field = rec.get(value_idx).unwrap_or("").trim();
        let market_value = if value_field.is_empty() {
            None
        } else {
            Some(parse_decimal(value_field, "Market Value", row_idx)?)
        };

        rows.push(HoldingsExportRecord::new(symbol, market_value));
    }

    Ok(rows)
}
