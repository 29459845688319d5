use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    models::{CategoryAum, CategoryMap, ReferenceRecord},
    report::format::format_dollar_amount,
};

/// Per-category AUM and Industry AUM sums for one firm, formatted for
/// display. An empty firm name is the "no selection" state and yields no
/// rows, as does a firm with no rows in the table. Output is sorted by
/// category name ascending.
pub fn aggregate_firm_aum(
    records: &[ReferenceRecord],
    firm_name: &str,
    categories: &CategoryMap,
) -> Vec<CategoryAum> {
    if firm_name.is_empty() {
        return Vec::new();
    }

    let mut groups: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.firm_name() == firm_name) {
        let category = categories.remap(record.category()).to_string();
        let sums = groups.entry(category).or_insert((Decimal::ZERO, Decimal::ZERO));
        sums.0 += *record.aum();
        sums.1 += *record.industry_aum();
    }

    groups
        .into_iter()
        .map(|(category, (aum, industry_aum))| {
            CategoryAum::new(
                category,
                format_dollar_amount(aum),
                format_dollar_amount(industry_aum),
            )
        })
        .collect()
}

/// Sorted, deduplicated firm names present in the reference table, for
/// building the selection list.
pub fn unique_firm_names(records: &[ReferenceRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.firm_name().clone()).collect();
    names.sort();
    names.dedup();
    names
}
