use std::sync::Arc;

use recap_n8n::client::SummaryGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: recap_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound client for the summarization webhook. Held as a trait
    /// object so tests can substitute a scripted fake.
    pub gateway: Arc<dyn SummaryGateway>,
}
