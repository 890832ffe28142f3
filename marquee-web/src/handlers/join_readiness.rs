//! Join readiness checking for watch parties
//!
//! Evaluates whether a party can accept a join by checking host presence and
//! playback buffer. Provides progress information for frontend loading
//! indicators.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use marquee_core::JoinCode;
use marquee_core::party::JoinReadiness;

use crate::server::AppState;

/// Response structure for join readiness checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinReadinessResponse {
    /// Whether the party can accept a join right now
    pub ready: bool,
    /// Descriptive message about readiness status
    pub message: String,
    /// Readiness progress as a fraction (0.0-1.0)
    pub progress: Option<f64>,
    /// Current participant count if the party exists
    pub participants: Option<usize>,
    /// Participant limit if the party exists
    pub max_participants: Option<usize>,
}

/// Checks if a party is ready to accept a join.
///
/// Always returns 200 OK with readiness information in the response body;
/// unknown or malformed codes report `ready: false` with a message rather
/// than an error status.
pub async fn join_readiness_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<JoinReadinessResponse> {
    info!("Checking join readiness for {}", code);

    let code = match JoinCode::parse(&code) {
        Ok(code) => code,
        Err(_) => {
            return Json(JoinReadinessResponse {
                ready: false,
                message: "Invalid join code".to_string(),
                progress: None,
                participants: None,
                max_participants: None,
            });
        }
    };

    let Some(party) = state.parties.party_by_code(&code).await else {
        return Json(JoinReadinessResponse {
            ready: false,
            message: "Party not found".to_string(),
            progress: None,
            participants: None,
            max_participants: None,
        });
    };

    let (ready, message, progress) =
        match party.join_readiness(state.parties.min_join_buffer_secs()) {
            JoinReadiness::Ready => (true, "Ready to join".to_string(), Some(1.0)),
            JoinReadiness::NotReady { message, progress } => (false, message, Some(progress)),
        };

    Json(JoinReadinessResponse {
        ready,
        message,
        progress,
        participants: Some(party.participants.len()),
        max_participants: Some(party.max_participants),
    })
}
