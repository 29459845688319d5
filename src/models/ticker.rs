use derive_getters::Getters;
use derive_new::new;

/// A row of the caller's ticker-of-interest list. Any other columns in the
/// uploaded file are ignored at read time.
#[derive(Clone, Debug, Eq, Getters, new, PartialEq)]
pub struct TickerRecord {
    symbol: String,
}

impl TickerRecord {
    pub fn is_missing(&self) -> bool {
        self.symbol.trim().is_empty()
    }
}
