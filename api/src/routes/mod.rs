use axum::Router;

use crate::AppState;

pub mod health;
pub mod stock;
pub mod stock_history;
pub mod transactions;


pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(stock_history::routes())
        .merge(stock::routes())
        .merge(transactions::routes())
}
