//! System endpoints: health check.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;

/// `GET /api/products/health` — Service health status, plain text.
#[utoipa::path(
    get,
    path = "/api/products/health",
    tag = "System",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is healthy", body = String),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "Product service is healthy")
}

/// System routes, mounted under `/api` alongside the product resource.
pub fn routes() -> Router<AppState> {
    Router::new().route("/products/health", get(health_handler))
}
