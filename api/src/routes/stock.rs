use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use stock_core::{get_stock, get_stock_list, StockQuery, StockResponse, StockSummary};

use crate::{AppState, ApiError};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stock", get(get_stock_handler))
        .route("/stock-list", get(get_stock_list_handler))
}

/// `?route=all` for everything, `?partno=X` for one item.
#[tracing::instrument(skip(state))]
async fn get_stock_handler(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<Json<StockResponse>, ApiError> {
    Ok(Json(get_stock(state.store.as_ref(), &query).await?))
}

async fn get_stock_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockSummary>>, ApiError> {
    Ok(Json(get_stock_list(state.store.as_ref()).await?))
}
