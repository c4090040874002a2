//! Month periods and the filters built from them.
//!
//! A period is a calendar month written `YYYY-MM`. Callers and stored
//! documents are sloppy about the zero padding (`2022-7`), so every period is
//! run through [`normalize_period`] before it is compared. Canonical strings
//! sort chronologically, which lets range checks stay plain string compares.

use serde::{Deserialize, Serialize};

use crate::error::{StockError, StockResult};

const MISSING_FILTER: &str =
    "Please provide either ?period=YYYY-MM or both ?startPeriod=YYYY-MM&endPeriod=YYYY-MM";

/// Canonicalizes a period to `YYYY-MM`.
///
/// Returns `None` for an absent or blank input. A missing month becomes `01`
/// and anything after the month (a day, say) is dropped.
#[must_use]
pub fn normalize_period(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split('-');
    let year = parts.next().unwrap_or_default();
    let month = match parts.next() {
        Some(m) if !m.is_empty() => m,
        _ => "01",
    };

    Some(format!("{year}-{month:0>2}"))
}

/// Which months a stock history query covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodFilter {
    Exact(String),
    Range { start: String, end: String },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    pub period: Option<String>,
    pub start_period: Option<String>,
    pub end_period: Option<String>,
}

impl PeriodFilter {
    /// Builds a filter from query parameters. `period` wins over a range when
    /// both are supplied.
    pub fn from_query(query: &PeriodQuery) -> StockResult<Self> {
        if let Some(period) = normalize_period(query.period.as_deref()) {
            return Ok(Self::Exact(period));
        }

        match (
            normalize_period(query.start_period.as_deref()),
            normalize_period(query.end_period.as_deref()),
        ) {
            (Some(start), Some(end)) => Ok(Self::Range { start, end }),
            _ => Err(StockError::InvalidFilter(MISSING_FILTER.to_string())),
        }
    }

    pub fn range(start: &str, end: &str) -> StockResult<Self> {
        Self::from_query(&PeriodQuery {
            period: None,
            start_period: Some(start.to_string()),
            end_period: Some(end.to_string()),
        })
    }

    pub fn exact(period: &str) -> StockResult<Self> {
        Self::from_query(&PeriodQuery {
            period: Some(period.to_string()),
            ..PeriodQuery::default()
        })
    }

    /// Whether an already-normalized period falls inside this filter.
    #[must_use]
    pub fn contains(&self, period: &str) -> bool {
        match self {
            Self::Exact(p) => p == period,
            Self::Range { start, end } => start.as_str() <= period && period <= end.as_str(),
        }
    }

    #[must_use]
    pub fn to_query(&self) -> PeriodQuery {
        match self {
            Self::Exact(p) => PeriodQuery {
                period: Some(p.clone()),
                ..PeriodQuery::default()
            },
            Self::Range { start, end } => PeriodQuery {
                period: None,
                start_period: Some(start.clone()),
                end_period: Some(end.clone()),
            },
        }
    }
}
