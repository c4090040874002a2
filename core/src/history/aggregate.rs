//! The aggregation pipeline.

use std::collections::BTreeMap;

use crate::period::{normalize_period, PeriodFilter};

use super::types::{EnrichedRecord, GroupReport, HistoryReport, StockRecord, Totals, UNGROUPED_LABEL};

/// Keeps the records whose normalized period matches `filter`, in input order.
#[must_use]
pub fn filter_records(records: &[StockRecord], filter: &PeriodFilter) -> Vec<StockRecord> {
    records
        .iter()
        .filter(|r| {
            normalize_period(Some(&r.period)).is_some_and(|period| filter.contains(&period))
        })
        .cloned()
        .collect()
}

/// Attaches unit cost and sold cost to a record.
#[must_use]
pub fn enrich(record: StockRecord) -> EnrichedRecord {
    let (unit_cost, sold_cost) = if record.quantity_bought == 0.0 {
        (0.0, 0.0)
    } else {
        let unit_cost = record.amount_bought / record.quantity_bought;
        (unit_cost, record.quantity_sold * unit_cost)
    };

    EnrichedRecord {
        record,
        unit_cost,
        sold_cost,
    }
}

/// Buckets enriched records by group name and sums each bucket.
///
/// Groups come back sorted by name; items keep their input order.
#[must_use]
pub fn group_records(records: Vec<EnrichedRecord>) -> Vec<GroupReport> {
    let mut groups: BTreeMap<String, GroupReport> = BTreeMap::new();

    for item in records {
        let name = item
            .record
            .group_name
            .clone()
            .unwrap_or_else(|| UNGROUPED_LABEL.to_string());

        let group = groups.entry(name).or_insert_with_key(|name| GroupReport {
            group_name: name.clone(),
            items: Vec::new(),
            totals: Totals::default(),
        });
        group.totals.add_record(&item);
        group.items.push(item);
    }

    groups.into_values().collect()
}

/// Sums every group's totals.
#[must_use]
pub fn grand_totals(groups: &[GroupReport]) -> Totals {
    groups.iter().fold(Totals::default(), |mut acc, group| {
        acc.add_totals(&group.totals);
        acc
    })
}

/// Runs the whole pipeline over a record batch.
#[must_use]
pub fn build_report(records: &[StockRecord], filter: &PeriodFilter) -> HistoryReport {
    let enriched = filter_records(records, filter).into_iter().map(enrich).collect();
    let groups = group_records(enriched);
    let grand_totals = grand_totals(&groups);

    tracing::debug!(
        records = records.len(),
        groups = groups.len(),
        "built stock history report"
    );

    let (period, start_period, end_period) = match filter {
        PeriodFilter::Exact(p) => (Some(p.clone()), None, None),
        PeriodFilter::Range { start, end } => (None, Some(start.clone()), Some(end.clone())),
    };

    HistoryReport {
        period,
        start_period,
        end_period,
        groups,
        grand_totals,
    }
}
