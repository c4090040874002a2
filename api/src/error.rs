use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stock_core::StockError;

/// Handler error wrapper so `?` works on [`StockError`] inside handlers.
#[derive(Debug)]
pub struct ApiError(pub StockError);

impl From<StockError> for ApiError {
    fn from(err: StockError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "code": self.0.error_code(),
        }));

        (status, body).into_response()
    }
}
