//! Property tests for the stock history pipeline.

use proptest::prelude::*;

use super::*;
use crate::period::PeriodFilter;

fn arb_record() -> impl Strategy<Value = StockRecord> {
    (
        prop::option::of(prop::sample::select(vec!["A", "B", "Filters", "filters"])),
        1u32..=12,
        0u32..50,
        0u32..5000,
        0u32..50,
        0u32..5000,
    )
        .prop_map(|(group, month, qty_buy, buy, qty_sold, sold)| StockRecord {
            group_name: group.map(String::from),
            part_no: format!("P{month}"),
            description: String::new(),
            period: format!("2022-{month}"),
            quantity_sold: f64::from(qty_sold),
            quantity_bought: f64::from(qty_buy),
            amount_bought: f64::from(buy),
            amount_sold: f64::from(sold),
            extra: serde_json::Map::new(),
        })
}

proptest! {
    /// Grand totals equal the sum of the group totals they were folded from.
    #[test]
    fn grand_totals_match_group_sums(
        records in prop::collection::vec(arb_record(), 0..40),
        start in 1u32..=12,
        len in 0u32..12,
    ) {
        let end = (start + len).min(12);
        let filter = PeriodFilter::range(&format!("2022-{start}"), &format!("2022-{end}")).unwrap();
        let report = build_report(&records, &filter);

        let mut qty_sold = 0.0;
        let mut qty_bought = 0.0;
        for group in &report.groups {
            qty_sold += group.totals.quantity_sold;
            qty_bought += group.totals.quantity_bought;
        }
        prop_assert_eq!(qty_sold, report.grand_totals.quantity_sold);
        prop_assert_eq!(qty_bought, report.grand_totals.quantity_bought);
    }

    /// Every matching record lands in exactly one group; nothing else does.
    #[test]
    fn every_match_in_exactly_one_group(
        records in prop::collection::vec(arb_record(), 0..40),
        month in 1u32..=12,
    ) {
        let filter = PeriodFilter::exact(&format!("2022-{month}")).unwrap();
        let report = build_report(&records, &filter);

        let expected = records
            .iter()
            .filter(|r| r.period == format!("2022-{month}"))
            .count();
        let grouped: usize = report.groups.iter().map(|g| g.items.len()).sum();
        prop_assert_eq!(grouped, expected);

        for group in &report.groups {
            for item in &group.items {
                let name = item.record.group_name.as_deref().unwrap_or(UNGROUPED_LABEL);
                prop_assert_eq!(name, group.group_name.as_str());
            }
        }
    }

    /// Filtering twice gives the same records in the same order.
    #[test]
    fn filtering_is_deterministic(records in prop::collection::vec(arb_record(), 0..40)) {
        let filter = PeriodFilter::range("2022-03", "2022-09").unwrap();
        prop_assert_eq!(filter_records(&records, &filter), filter_records(&records, &filter));
    }

    /// Nothing bought means no cost, and never NaN.
    #[test]
    fn zero_bought_means_zero_cost(record in arb_record()) {
        let item = enrich(record);
        if item.record.quantity_bought == 0.0 {
            prop_assert_eq!(item.unit_cost, 0.0);
            prop_assert_eq!(item.sold_cost, 0.0);
        }
        prop_assert!(!item.unit_cost.is_nan());
        prop_assert!(!item.sold_cost.is_nan());
    }
}
