//! Where records come from.
//!
//! A store is opened once at startup and shared behind an `Arc` by every
//! request handler. Stores only fetch; all query logic lives in the domain
//! modules so both backends answer identically.

mod file;
mod http;

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::{StockError, StockResult},
    history::StockRecord,
    period::PeriodFilter,
    stock::StockItem,
    transactions::Transaction,
};

pub use file::{Dataset, FileStore};
pub use http::HttpStore;

#[async_trait]
pub trait DataStore: Send + Sync {
    /// Stock history rows matching `filter`. Implementations may return a
    /// superset; callers re-filter.
    async fn stock_history(&self, filter: &PeriodFilter) -> StockResult<Vec<StockRecord>>;

    async fn stock_items(&self) -> StockResult<Vec<StockItem>>;

    async fn transactions(&self) -> StockResult<Vec<Transaction>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub source: SourceKind,
    /// JSON dataset for the file backend.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// CSV export replacing the dataset's stock history.
    #[serde(default)]
    pub stock_history_csv: Option<PathBuf>,
    /// Upstream API root for the http backend.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/dataset.json")
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            path: default_path(),
            stock_history_csv: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

pub async fn open(config: &DataConfig) -> StockResult<Arc<dyn DataStore>> {
    match config.source {
        SourceKind::File => {
            let store =
                FileStore::load(&config.path, config.stock_history_csv.as_deref()).await?;
            Ok(Arc::new(store))
        }
        SourceKind::Http => {
            let base_url = config.base_url.as_deref().ok_or_else(|| {
                StockError::DataLoad("data.base_url is required for the http source".to_string())
            })?;
            Ok(Arc::new(HttpStore::new(base_url, config.timeout_secs)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_source_requires_base_url() {
        let config = DataConfig {
            source: SourceKind::Http,
            ..DataConfig::default()
        };
        let err = open(&config).await.err().unwrap();
        assert!(matches!(err, StockError::DataLoad(_)));
    }

    #[tokio::test]
    async fn test_missing_dataset_is_load_error() {
        let config = DataConfig {
            path: PathBuf::from("/nonexistent/dataset.json"),
            ..DataConfig::default()
        };
        let err = open(&config).await.err().unwrap();
        assert!(matches!(err, StockError::DataLoad(_)));
    }
}
