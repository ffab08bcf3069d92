//! Observability HTTP Routes
//!
//! Health check and request counters.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::requests::RequestService;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

/// Create observability routes (`/health`, `/metrics`)
pub fn observability_routes(service: RequestService) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(service)
}

async fn health_handler(State(service): State<RequestService>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: service.store().len(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(service): State<RequestService>) -> impl IntoResponse {
    (StatusCode::OK, Json(service.metrics().snapshot()))
}
