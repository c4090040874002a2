//! Period-bucketed stock history reports.
//!
//! Records flow through `filter -> enrich -> group -> total`; each stage is a
//! pure function over the previous stage's output.

mod aggregate;
mod types;

#[cfg(test)]
mod props;

pub use aggregate::{build_report, enrich, filter_records, grand_totals, group_records};
pub(crate) use types::zero_if_null;
pub use types::{EnrichedRecord, GroupReport, HistoryReport, StockRecord, Totals, UNGROUPED_LABEL};
