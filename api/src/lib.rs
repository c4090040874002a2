//! HTTP layer for the stock query service.
//!
//! The same [`create_router`] backs the long-running server and the Lambda
//! entry point.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use stock_core::DataStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

/// Builds the full router with CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
