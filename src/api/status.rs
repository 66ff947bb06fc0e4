use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use super::AdminState;
use crate::round::RoundSnapshot;

#[derive(Serialize)]
pub struct BotStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub started_at: String,
    pub timestamp: String,
    pub owner_configured: bool,
    pub allowed_users: usize,
    pub cached_predictions: usize,
    pub round: RoundSnapshot,
}

/// GET /api/v1/status
pub async fn get_status(State(state): State<Arc<AdminState>>) -> Json<BotStatus> {
    let now = chrono::Utc::now();
    let snapshot = state.service.status().await;

    Json(BotStatus {
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.started_at).num_seconds().max(0),
        started_at: state.started_at.to_rfc3339(),
        timestamp: now.to_rfc3339(),
        owner_configured: snapshot.owner_configured,
        allowed_users: snapshot.allowed_users,
        cached_predictions: snapshot.cached_predictions,
        round: snapshot.round,
    })
}

pub fn status_router(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .with_state(state)
}
