//! Health check endpoint, mounted at the root (not under `/api/v1`).

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health probe response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when every dependency is reachable, `"degraded"` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database answered a probe query.
    pub db_healthy: bool,
}

/// GET /health
///
/// Requires no bearer token: load balancers and container orchestrators
/// probe this endpoint unauthenticated.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = recap_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health probe failed to reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
