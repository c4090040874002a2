use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{StockError, StockResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub unqcode: String,
    pub customer: String,
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionQuery {
    All,
    Date(NaiveDate),
    Range { start: NaiveDate, end: NaiveDate },
    Customer(String),
}

/// Parses a `YYYY-MM-DD` path segment.
pub fn parse_date(raw: &str) -> StockResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| StockError::InvalidQuery(format!("Invalid date: {raw}, expected YYYY-MM-DD")))
}

pub fn find_by_code(transactions: Vec<Transaction>, code: &str) -> StockResult<Transaction> {
    transactions
        .into_iter()
        .find(|t| t.unqcode == code)
        .ok_or_else(|| StockError::NotFound("Transaction not found".to_string()))
}

/// Runs a query against the full transaction list.
///
/// `All` never fails. Every other query reports an empty match as not found.
pub fn query(
    transactions: Vec<Transaction>,
    query: &TransactionQuery,
) -> StockResult<Vec<Transaction>> {
    let (matches, not_found): (Vec<_>, &str) = match query {
        TransactionQuery::All => return Ok(transactions),
        TransactionQuery::Date(date) => (
            transactions.into_iter().filter(|t| t.date == *date).collect(),
            "No transactions found for this date",
        ),
        TransactionQuery::Range { start, end } => (
            transactions
                .into_iter()
                .filter(|t| *start <= t.date && t.date <= *end)
                .collect(),
            "No transactions found in this date range",
        ),
        TransactionQuery::Customer(name) => {
            let name = name.to_lowercase();
            (
                transactions
                    .into_iter()
                    .filter(|t| t.customer.to_lowercase() == name)
                    .collect(),
                "No transactions found for this customer",
            )
        }
    };

    if matches.is_empty() {
        Err(StockError::NotFound(not_found.to_string()))
    } else {
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn tx(code: &str, customer: &str, on: &str, amount: f64) -> Transaction {
        Transaction {
            unqcode: code.to_string(),
            customer: customer.to_string(),
            date: date(on),
            amount,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("TX1001", "Alice", "2025-08-24", 1000.0),
            tx("TX1002", "Bob", "2025-08-24", 500.0),
            tx("TX1003", "Alice", "2025-08-23", 200.0),
        ]
    }

    fn codes(list: &[Transaction]) -> Vec<&str> {
        list.iter().map(|t| t.unqcode.as_str()).collect()
    }

    #[test]
    fn test_all() {
        assert_eq!(query(sample(), &TransactionQuery::All).unwrap().len(), 3);
    }

    #[test]
    fn test_all_on_empty_is_ok() {
        assert!(query(vec![], &TransactionQuery::All).unwrap().is_empty());
    }

    #[test]
    fn test_by_code() {
        assert_eq!(find_by_code(sample(), "TX1002").unwrap().customer, "Bob");

        let err = find_by_code(sample(), "TX9").unwrap_err();
        assert!(matches!(err, StockError::NotFound(_)));
        assert_eq!(err.to_string(), "Transaction not found");
    }

    #[test]
    fn test_by_date() {
        let found = query(sample(), &TransactionQuery::Date(date("2025-08-24"))).unwrap();
        assert_eq!(codes(&found), ["TX1001", "TX1002"]);
    }

    #[test]
    fn test_by_range_is_inclusive() {
        let range = TransactionQuery::Range { start: date("2025-08-23"), end: date("2025-08-23") };
        assert_eq!(codes(&query(sample(), &range).unwrap()), ["TX1003"]);
    }

    #[test]
    fn test_by_customer_ignores_case() {
        let found = query(sample(), &TransactionQuery::Customer("ALICE".into())).unwrap();
        assert_eq!(codes(&found), ["TX1001", "TX1003"]);
    }

    #[rstest]
    #[case(TransactionQuery::Date(date("2020-01-01")), "No transactions found for this date")]
    #[case(
        TransactionQuery::Range { start: date("2024-01-01"), end: date("2024-12-31") },
        "No transactions found in this date range"
    )]
    #[case(TransactionQuery::Customer("Carol".into()), "No transactions found for this customer")]
    fn test_empty_match_is_not_found(#[case] q: TransactionQuery, #[case] message: &str) {
        let err = query(sample(), &q).unwrap_err();
        assert!(matches!(err, StockError::NotFound(_)));
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date("24/08/2025"), Err(StockError::InvalidQuery(_))));
    }
}
