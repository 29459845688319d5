pub mod aum;
pub mod format;
pub mod holdings;

pub use aum::{aggregate_firm_aum, unique_firm_names};
pub use format::{format_dollar_amount, format_whole_dollars};
pub use holdings::generate_holdings_summary;
