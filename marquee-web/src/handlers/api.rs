//! General JSON API endpoints

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

/// Liveness and build information for operators and monitors.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
    pub version: String,
    pub uptime_secs: u64,
    pub active_parties: usize,
}

/// Reports server liveness.
///
/// Always returns 200 with uptime, runtime mode, and the current party count.
pub async fn api_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mode: state.mode.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.server_started_at.elapsed().as_secs(),
        active_parties: state.parties.party_count().await,
    })
}
