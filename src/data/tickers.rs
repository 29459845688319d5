use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::{data::utils::required_column, models::TickerRecord};

/// Reads the caller's ticker list. Only the `Ticker` column is kept; rows
/// with an empty ticker are carried through and dropped by the join.
pub fn read_ticker_file(path: &str) -> Result<Vec<TickerRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open ticker file at path: {}", path))?;

    let headers = reader.headers()?.clone();
    let ticker_idx = required_column(&headers, "Ticker", "Ticker file")?;

    let mut tickers = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let rec = record
            .with_context(|| format!("Failed to read ticker file at row {}", row_idx + 1))?;
        let symbol = rec.get(ticker_idx).unwrap_or("").trim().to_string();
        tickers.push(TickerRecord::new(symbol));
    }

    Ok(tickers)
}
