//! Optional admin HTTP API: health probes, metrics and a status document.

pub mod admin;
pub mod status;

pub use admin::admin_router;
pub use status::status_router;

use axum::{middleware, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::bot::BotService;
use crate::utils::Metrics;

/// Shared state for all admin routes
pub struct AdminState {
    pub service: Arc<BotService>,
    pub metrics: Arc<Metrics>,
    pub started_at: DateTime<Utc>,
}

impl AdminState {
    pub fn new(service: Arc<BotService>, metrics: Arc<Metrics>) -> Self {
        Self {
            service,
            metrics,
            started_at: Utc::now(),
        }
    }
}

pub fn router(state: Arc<AdminState>) -> Router {
    Router::new()
        .merge(admin_router(state.clone()))
        .nest("/api/v1", status_router(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(logging_middleware)),
        )
}

/// Bind and serve until the process exits
pub async fn serve(port: u16, state: Arc<AdminState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Admin API listening on port {}", port);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// One log line per admin request
async fn logging_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = std::time::Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), latency_ms, "Admin request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), latency_ms, "Admin request");
    }
    response
}
