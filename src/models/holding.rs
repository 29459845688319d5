use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// A data row of the Whale Wisdom 13F export, below its metadata header.
/// Market value is absent when the export cell is empty.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct HoldingsExportRecord {
    symbol: String,
    market_value: Option<Decimal>,
}

/// A ticker joined against the export, with the market value coerced to
/// whole dollars. Zero-value and ticker-less rows never make it into one
/// of these.
#[derive(Clone, Debug, Eq, Getters, new, PartialEq)]
pub struct JoinedHolding {
    ticker: String,
    market_value: i64,
}
