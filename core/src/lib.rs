//! Stock query core: period-bucketed stock history reports, stock item and
//! transaction lookups, and the stores that feed them.
//!
//! Nothing here knows about HTTP; the `stock-api` crate maps these results
//! and errors onto responses.

pub mod error;
pub mod history;
pub mod period;
pub mod stock;
pub mod store;
pub mod transactions;

pub use error::{StockError, StockResult};
pub use history::{HistoryReport, StockRecord};
pub use period::{normalize_period, PeriodFilter, PeriodQuery};
pub use stock::{StockItem, StockLookup, StockQuery, StockResponse, StockSummary};
pub use store::{DataConfig, DataStore};
pub use transactions::{Transaction, TransactionQuery};

/// Fetches and aggregates the stock history for one query.
///
/// Upstream failures propagate unchanged; an empty match is a valid, empty
/// report.
pub async fn get_stock_history(
    store: &dyn DataStore,
    query: &PeriodQuery,
) -> StockResult<HistoryReport> {
    let filter = PeriodFilter::from_query(query)?;
    let records = store.stock_history(&filter).await?;
    Ok(history::build_report(&records, &filter))
}

/// Resolves a `/stock` query to either every item or a single one.
pub async fn get_stock(store: &dyn DataStore, query: &StockQuery) -> StockResult<StockResponse> {
    let lookup = StockLookup::from_query(query)?;
    let items = store.stock_items().await?;

    match lookup {
        StockLookup::All => Ok(StockResponse::Many(items)),
        StockLookup::PartNo(part_no) => {
            stock::find_by_part_no(items, &part_no).map(StockResponse::One)
        }
    }
}

pub async fn get_stock_list(store: &dyn DataStore) -> StockResult<Vec<StockSummary>> {
    stock::summarize(store.stock_items().await?)
}

pub async fn get_transactions(
    store: &dyn DataStore,
    query: &TransactionQuery,
) -> StockResult<Vec<Transaction>> {
    transactions::query(store.transactions().await?, query)
}

pub async fn get_transaction(store: &dyn DataStore, code: &str) -> StockResult<Transaction> {
    transactions::find_by_code(store.transactions().await?, code)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::store::{Dataset, FileStore};

    /// A store whose upstream is always down.
    struct DownStore;

    #[async_trait]
    impl DataStore for DownStore {
        async fn stock_history(&self, _: &PeriodFilter) -> StockResult<Vec<StockRecord>> {
            Err(StockError::Upstream("connection refused".into()))
        }

        async fn stock_items(&self) -> StockResult<Vec<StockItem>> {
            Err(StockError::Upstream("connection refused".into()))
        }

        async fn transactions(&self) -> StockResult<Vec<Transaction>> {
            Err(StockError::Upstream("connection refused".into()))
        }
    }

    fn period(p: &str) -> PeriodQuery {
        PeriodQuery {
            period: Some(p.to_string()),
            ..PeriodQuery::default()
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_an_empty_report() {
        let err = get_stock_history(&DownStore, &period("2022-07")).await.unwrap_err();
        assert!(matches!(err, StockError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_bad_filter_short_circuits_before_fetch() {
        let err = get_stock_history(&DownStore, &PeriodQuery::default()).await.unwrap_err();
        assert!(matches!(err, StockError::InvalidFilter(_)));
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_report() {
        let store = FileStore::new(Dataset::default());
        let report = get_stock_history(&store, &period("2099-01")).await.unwrap();
        assert!(report.groups.is_empty());
        assert_eq!(report.grand_totals, history::Totals::default());
    }

    #[tokio::test]
    async fn test_get_stock_single_and_all() {
        let store = FileStore::new(Dataset {
            stock: serde_json::from_value(serde_json::json!([
                { "PART_NO": "A", "DESC": "Alpha" },
                { "PART_NO": "B", "DESC": "Beta" }
            ]))
            .unwrap(),
            ..Dataset::default()
        });

        let all = get_stock(&store, &StockQuery { route: Some("all".into()), partno: None })
            .await
            .unwrap();
        assert!(matches!(all, StockResponse::Many(ref items) if items.len() == 2));

        let one = get_stock(&store, &StockQuery { route: None, partno: Some("B".into()) })
            .await
            .unwrap();
        let json = serde_json::to_value(&one).unwrap();
        assert_eq!(json["DESC"], "Beta");
    }
}
