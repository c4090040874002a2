use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StockError, StockResult};

/// A stock document. Fields beyond part number and description pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    #[serde(rename = "PART_NO")]
    pub part_no: String,
    #[serde(rename = "DESC", default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    #[serde(rename = "PART_NO")]
    pub part_no: String,
    #[serde(rename = "DESC")]
    pub description: String,
}

/// Body of a `/stock` response: the whole list or one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StockResponse {
    Many(Vec<StockItem>),
    One(StockItem),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockLookup {
    All,
    PartNo(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockQuery {
    pub route: Option<String>,
    pub partno: Option<String>,
}

impl StockLookup {
    /// `route=all` wins; otherwise a non-empty `partno` is required.
    pub fn from_query(query: &StockQuery) -> StockResult<Self> {
        if query.route.as_deref() == Some("all") {
            return Ok(Self::All);
        }
        match query.partno.as_deref().map(str::trim) {
            Some(part_no) if !part_no.is_empty() => Ok(Self::PartNo(part_no.to_string())),
            _ => Err(StockError::InvalidQuery(
                "Please provide a partno or use route=all".to_string(),
            )),
        }
    }
}

pub fn find_by_part_no(items: Vec<StockItem>, part_no: &str) -> StockResult<StockItem> {
    items
        .into_iter()
        .find(|item| item.part_no == part_no)
        .ok_or_else(|| StockError::NotFound("Stock item not found".to_string()))
}

/// Part number and description of every item, sorted by description.
pub fn summarize(items: Vec<StockItem>) -> StockResult<Vec<StockSummary>> {
    if items.is_empty() {
        return Err(StockError::NotFound("No stock items found".to_string()));
    }

    let mut list: Vec<_> = items
        .into_iter()
        .map(|item| StockSummary {
            part_no: item.part_no,
            description: item.description,
        })
        .collect();
    list.sort_by(|a, b| a.description.cmp(&b.description));
    Ok(list)
}
