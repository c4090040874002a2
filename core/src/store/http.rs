use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::DataStore;
use crate::{
    error::{StockError, StockResult},
    history::{filter_records, StockRecord},
    period::{PeriodFilter, PeriodQuery},
    stock::StockItem,
    transactions::Transaction,
};

/// Fetches collections from an upstream JSON document API.
///
/// Expects `GET {base}/stockhistory`, `GET {base}/stock` and
/// `GET {base}/transactions`, each answering with a JSON array.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: &str, timeout_secs: u64) -> StockResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self::new_w_client(client, base_url))
    }

    pub fn new_w_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: Option<&PeriodQuery>,
    ) -> StockResult<Vec<T>> {
        let url = self.url(collection);
        let mut req = self.client.get(&url);
        if let Some(query) = query {
            req = req.query(query);
        }

        let res = req.send().await.inspect_err(|e| {
            tracing::error!(%url, error = %e, "upstream request failed");
        })?;

        if res.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(StockError::Upstream(format!("rate limited by {url}")));
        }

        let list = res.error_for_status()?.json::<Vec<T>>().await?;
        tracing::debug!(%url, count = list.len(), "fetched upstream collection");
        Ok(list)
    }
}

#[async_trait]
impl DataStore for HttpStore {
    async fn stock_history(&self, filter: &PeriodFilter) -> StockResult<Vec<StockRecord>> {
        let records = self
            .fetch::<StockRecord>("stockhistory", Some(&filter.to_query()))
            .await?;
        Ok(filter_records(&records, filter))
    }

    async fn stock_items(&self) -> StockResult<Vec<StockItem>> {
        self.fetch("stock", None).await
    }

    async fn transactions(&self) -> StockResult<Vec<Transaction>> {
        self.fetch("transactions", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_trims_trailing_slash() {
        let store = HttpStore::new_w_client(reqwest::Client::new(), "http://db.local/api/");
        assert_eq!(store.url("stock"), "http://db.local/api/stock");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_upstream_error() {
        // bind then drop so the port is known to be closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = HttpStore::new(&format!("http://{addr}"), 2).unwrap();
        let err = store.stock_items().await.unwrap_err();
        assert!(matches!(err, StockError::Upstream(_)));
    }
}
