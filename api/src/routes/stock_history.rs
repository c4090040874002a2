//! `GET /api/stockhistory?period=YYYY-MM` or
//! `?startPeriod=YYYY-MM&endPeriod=YYYY-MM`.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use stock_core::{get_stock_history, HistoryReport, PeriodQuery};

use crate::{AppState, ApiError};

pub fn routes() -> Router<AppState> {
    Router::new().route("/stockhistory", get(get_stock_history_handler))
}

#[tracing::instrument(skip(state))]
async fn get_stock_history_handler(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<HistoryReport>, ApiError> {
    let report = get_stock_history(state.store.as_ref(), &query).await?;
    Ok(Json(report))
}
