//! GET /health

use axum::Json;

use crate::types::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        service: env!("CARGO_PKG_NAME").into(),
    })
}
