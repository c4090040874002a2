use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Label for records that carry no group name.
pub const UNGROUPED_LABEL: &str = "Ungrouped";

/// One stock movement row for a part in a month.
///
/// Stored documents use upper-case field names; both spellings deserialize.
/// Numbers that are absent, `null` or blank read as zero. Any other document
/// fields (`_id` and friends) are carried along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    #[serde(alias = "GROUP_NAME", default)]
    pub group_name: Option<String>,
    #[serde(alias = "PART_NO", default)]
    pub part_no: String,
    #[serde(alias = "DESC", default)]
    pub description: String,
    #[serde(alias = "PERIOD_ISO", default)]
    pub period: String,
    #[serde(alias = "QTY_SOLD", default, deserialize_with = "zero_if_null")]
    pub quantity_sold: f64,
    #[serde(alias = "QTY_BUY", default, deserialize_with = "zero_if_null")]
    pub quantity_bought: f64,
    #[serde(alias = "BUY", default, deserialize_with = "zero_if_null")]
    pub amount_bought: f64,
    #[serde(alias = "SOLD", default, deserialize_with = "zero_if_null")]
    pub amount_sold: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record with its derived cost fields attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: StockRecord,
    /// `amount_bought / quantity_bought`, zero when nothing was bought.
    pub unit_cost: f64,
    /// `quantity_sold * unit_cost`, zero when nothing was bought.
    pub sold_cost: f64,
}

impl EnrichedRecord {
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.record.amount_sold - self.sold_cost
    }
}

/// Summed figures for a group, or for the whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub quantity_sold: f64,
    pub quantity_bought: f64,
    pub total_bought: f64,
    pub total_sold: f64,
    pub total_profit: f64,
}

impl Totals {
    pub fn add_record(&mut self, item: &EnrichedRecord) {
        self.quantity_sold += item.record.quantity_sold;
        self.quantity_bought += item.record.quantity_bought;
        self.total_bought += item.record.amount_bought;
        self.total_sold += item.record.amount_sold;
        self.total_profit += item.profit();
    }

    pub fn add_totals(&mut self, other: &Self) {
        self.quantity_sold += other.quantity_sold;
        self.quantity_bought += other.quantity_bought;
        self.total_bought += other.total_bought;
        self.total_sold += other.total_sold;
        self.total_profit += other.total_profit;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub group_name: String,
    pub items: Vec<EnrichedRecord>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReport {
    /// The exact period queried, `None` for a range query.
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_period: Option<String>,
    pub groups: Vec<GroupReport>,
    pub grand_totals: Totals,
}
