use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the cohort-analyzer reference table. NNA columns are carried
/// through the load but not used in any current output.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct ReferenceRecord {
    firm_name: String,
    category: String,
    aum: Decimal,
    industry_aum: Decimal,
    nna: Decimal,
    industry_nna: Decimal,
}

/// A display row of the AUM lookup: per-category sums, already rendered as
/// currency strings.
#[derive(Clone, Debug, Deserialize, Eq, Getters, new, PartialEq, Serialize)]
pub struct CategoryAum {
    category: String,
    vest_aum: String,
    industry_aum: String,
}
