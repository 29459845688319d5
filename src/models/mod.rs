pub mod category;
pub mod holding;
pub mod reference;
pub mod ticker;

pub use category::CategoryMap;
pub use holding::{HoldingsExportRecord, JoinedHolding};
pub use reference::{CategoryAum, ReferenceRecord};
pub use ticker::TickerRecord;
