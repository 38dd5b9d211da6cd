//! Health check route.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::server::server_core::AppState;
use crate::server::types::HealthResponse;

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
