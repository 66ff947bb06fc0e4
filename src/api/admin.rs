use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

use super::AdminState;

/// Liveness: the process is up and serving
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Readiness: the bot is wired up. Reports whether owner commands are live.
pub async fn ready(State(state): State<Arc<AdminState>>) -> Json<serde_json::Value> {
    let status = state.service.status().await;
    Json(json!({
        "ready": true,
        "version": env!("CARGO_PKG_VERSION"),
        "owner_commands": status.owner_configured,
    }))
}

/// Prometheus text exposition
pub async fn metrics(State(state): State<Arc<AdminState>>) -> (StatusCode, String) {
    match state.metrics.render() {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

pub fn admin_router(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .with_state(state)
}
