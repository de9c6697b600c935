//! Status HTTP Route
//!
//! Liveness check; always answers while the process is serving.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Create status routes
pub fn status_routes() -> Router {
    Router::new().route("/status", get(status_handler))
}

/// Status handler
async fn status_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusResponse { status: "OK" }))
}
