//! Error types shared by the stock queries and data stores.

use thiserror::Error;

pub type StockResult<T> = Result<T, StockError>;

/// Everything that can go wrong while answering a query.
#[derive(Debug, Error)]
pub enum StockError {
    /// Neither an exact period nor a complete range was supplied.
    #[error("{0}")]
    InvalidFilter(String),

    /// A non-period query parameter was missing or malformed.
    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    NotFound(String),

    /// The upstream record source could not be reached or answered badly.
    #[error("upstream fetch failed: {0}")]
    Upstream(String),

    #[error("failed to load data: {0}")]
    DataLoad(String),
}

impl StockError {
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidFilter(_) | Self::InvalidQuery(_) => 400,
            Self::NotFound(_) => 404,
            Self::Upstream(_) => 502,
            Self::DataLoad(_) => 500,
        }
    }

    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM_FETCH_FAILURE",
            Self::DataLoad(_) => "DATA_LOAD_ERROR",
        }
    }
}

impl From<reqwest::Error> for StockError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<csv::Error> for StockError {
    fn from(err: csv::Error) -> Self {
        Self::DataLoad(err.to_string())
    }
}
