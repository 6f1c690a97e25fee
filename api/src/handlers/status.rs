//! Liveness handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "API Credit Risk opérationnelle",
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
