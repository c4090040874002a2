//! Transaction endpoints. Each lookup kind has its own typed path.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stock_core::{
    get_transaction, get_transactions, transactions::parse_date, Transaction, TransactionQuery,
};

use crate::{AppState, ApiError};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(all))
        .route("/transactions/code/{code}", get(by_code))
        .route("/transactions/date/{date}", get(by_date))
        .route("/transactions/range/{start}/{end}", get(by_range))
        .route("/transactions/customer/{name}", get(by_customer))
}

async fn run(state: &AppState, query: TransactionQuery) -> Result<Json<Vec<Transaction>>, ApiError> {
    tracing::debug!(?query, "transaction lookup");
    Ok(Json(get_transactions(state.store.as_ref(), &query).await?))
}

async fn all(State(state): State<AppState>) -> Result<Json<Vec<Transaction>>, ApiError> {
    run(&state, TransactionQuery::All).await
}

async fn by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(get_transaction(state.store.as_ref(), &code).await?))
}

async fn by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    run(&state, TransactionQuery::Date(parse_date(&date)?)).await
}

async fn by_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let query = TransactionQuery::Range {
        start: parse_date(&start)?,
        end: parse_date(&end)?,
    };
    run(&state, query).await
}

async fn by_customer(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    run(&state, TransactionQuery::Customer(name)).await
}
