#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        models::{CategoryMap, ReferenceRecord},
        report::aum::{aggregate_firm_aum, unique_firm_names},
    };

    fn record(firm: &str, category: &str, aum: Decimal, industry_aum: Decimal) -> ReferenceRecord {
        ReferenceRecord::new(
            firm.to_string(),
            category.to_string(),
            aum,
            industry_aum,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }

    #[test]
    fn sums_and_remaps_categories_for_the_selected_firm() {
        let records = vec![
            record("Acme Advisors", "BUIGX", dec!(100), dec!(1000)),
            record("Acme Advisors", "BUIGX", dec!(200), dec!(2000)),
            record("Other Firm", "BUIGX", dec!(999), dec!(9999)),
        ];

        let rows = aggregate_firm_aum(&records, "Acme Advisors", &CategoryMap::default());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category(), "Buffer10/Hedged Equity");
        assert_eq!(rows[0].vest_aum(), "$300.00");
        assert_eq!(rows[0].industry_aum(), "$3,000.00");
    }

    #[test]
    fn unmapped_categories_keep_their_name() {
        let records = vec![record("Acme Advisors", "Large Blend", dec!(50), dec!(500))];

        let rows = aggregate_firm_aum(&records, "Acme Advisors", &CategoryMap::default());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category(), "Large Blend");
    }

    #[test]
    fn empty_firm_name_is_the_no_selection_state() {
        let records = vec![record("Acme Advisors", "BUIGX", dec!(100), dec!(1000))];

        let rows = aggregate_firm_aum(&records, "", &CategoryMap::default());

        assert!(rows.is_empty());
    }

    #[test]
    fn unknown_firm_yields_an_empty_table() {
        let records = vec![record("Acme Advisors", "BUIGX", dec!(100), dec!(1000))];

        let rows = aggregate_firm_aum(&records, "No Such Firm", &CategoryMap::default());

        assert!(rows.is_empty());
    }

    #[test]
    fn output_is_sorted_by_category_name() {
        let records = vec![
            record("Acme Advisors", "KNGIX", dec!(10), dec!(100)),
            record("Acme Advisors", "BUIGX", dec!(20), dec!(200)),
            record("Acme Advisors", "Large Blend", dec!(30), dec!(300)),
        ];

        let rows = aggregate_firm_aum(&records, "Acme Advisors", &CategoryMap::default());

        let categories: Vec<&str> = rows.iter().map(|r| r.category().as_str()).collect();
        assert_eq!(
            categories,
            vec!["Buffer10/Hedged Equity", "Covered Call", "Large Blend"]
        );
    }

    #[test]
    fn firm_names_are_sorted_and_deduplicated() {
        let records = vec![
            record("Zenith", "X", dec!(1), dec!(1)),
            record("Acme Advisors", "X", dec!(1), dec!(1)),
            record("Zenith", "Y", dec!(1), dec!(1)),
        ];

        assert_eq!(unique_firm_names(&records), vec!["Acme Advisors", "Zenith"]);
    }
}
