use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Map;

use super::DataStore;
use crate::{
    error::{StockError, StockResult},
    history::{filter_records, zero_if_null, StockRecord},
    period::PeriodFilter,
    stock::StockItem,
    transactions::Transaction,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub stock: Vec<StockItem>,
    pub stock_history: Vec<StockRecord>,
    pub transactions: Vec<Transaction>,
}

/// Serves everything from memory, loaded once from static files.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    data: Dataset,
}

impl FileStore {
    #[must_use]
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    /// Reads the JSON dataset, then swaps in stock history from a CSV export
    /// when one is given.
    pub async fn load(path: &Path, stock_history_csv: Option<&Path>) -> StockResult<Self> {
        let contents = read(path).await?;
        let mut data: Dataset = serde_json::from_str(&contents)
            .map_err(|e| StockError::DataLoad(format!("{}: {e}", path.display())))?;

        if let Some(csv_path) = stock_history_csv {
            data.stock_history = parse_history_csv(&read(csv_path).await?)?;
        }

        tracing::info!(
            path = %path.display(),
            stock = data.stock.len(),
            stock_history = data.stock_history.len(),
            transactions = data.transactions.len(),
            "loaded dataset"
        );

        Ok(Self::new(data))
    }
}

async fn read(path: &Path) -> StockResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StockError::DataLoad(format!("{}: {e}", path.display())))
}

/// One row of a stock history CSV export. Kept flat: csv cannot decode
/// numbers through `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "GROUP_NAME", alias = "groupName", default)]
    group_name: Option<String>,
    #[serde(rename = "PART_NO", alias = "partNo", default)]
    part_no: String,
    #[serde(rename = "DESC", alias = "description", default)]
    description: String,
    #[serde(rename = "PERIOD_ISO", alias = "period", default)]
    period: String,
    #[serde(rename = "QTY_SOLD", alias = "quantitySold", default, deserialize_with = "zero_if_null")]
    quantity_sold: f64,
    #[serde(rename = "QTY_BUY", alias = "quantityBought", default, deserialize_with = "zero_if_null")]
    quantity_bought: f64,
    #[serde(rename = "BUY", alias = "amountBought", default, deserialize_with = "zero_if_null")]
    amount_bought: f64,
    #[serde(rename = "SOLD", alias = "amountSold", default, deserialize_with = "zero_if_null")]
    amount_sold: f64,
}

impl From<CsvRow> for StockRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            group_name: row.group_name,
            part_no: row.part_no,
            description: row.description,
            period: row.period,
            quantity_sold: row.quantity_sold,
            quantity_bought: row.quantity_bought,
            amount_bought: row.amount_bought,
            amount_sold: row.amount_sold,
            extra: Map::new(),
        }
    }
}

/// Parses a stock history CSV with a header row, e.g.
/// `GROUP_NAME,PART_NO,DESC,PERIOD_ISO,QTY_SOLD,QTY_BUY,BUY,SOLD`.
/// Blank numeric cells read as zero.
pub(crate) fn parse_history_csv(contents: &str) -> StockResult<Vec<StockRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    rdr.deserialize::<CsvRow>()
        .map(|row| row.map(StockRecord::from).map_err(StockError::from))
        .collect()
}

#[async_trait]
impl DataStore for FileStore {
    async fn stock_history(&self, filter: &PeriodFilter) -> StockResult<Vec<StockRecord>> {
        Ok(filter_records(&self.data.stock_history, filter))
    }

    async fn stock_items(&self) -> StockResult<Vec<StockItem>> {
        Ok(self.data.stock.clone())
    }

    async fn transactions(&self) -> StockResult<Vec<Transaction>> {
        Ok(self.data.transactions.clone())
    }
}
