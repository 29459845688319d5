pub mod cache;
pub mod export;
pub mod reference;
pub mod tickers;
pub mod utils;

pub use cache::{Clock, ReferenceCache, SystemClock};
pub use export::read_holdings_export;
pub use reference::load_reference_table;
pub use tickers::read_ticker_file;
