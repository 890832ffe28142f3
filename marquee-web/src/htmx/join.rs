//! Join flow partial - the readiness swap behind the /join placeholder
//!
//! While the target party is not ready the partial re-renders the loading
//! placeholder and the client keeps polling. Terminal outcomes (ready
//! content, join form, unresolvable code) return HTMX status 286, which
//! stops the polling trigger, so the placeholder is replaced exactly once.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use marquee_core::JoinCode;
use marquee_core::party::JoinReadiness;

use crate::components::join;
use crate::server::AppState;

/// HTMX "stop polling" status code.
const STOP_POLLING: u16 = 286;

#[derive(Debug, Deserialize)]
pub struct JoinContentParams {
    pub code: Option<String>,
}

/// Serves the join content fragment.
///
/// Without a code the join form is ready immediately. With a code, the
/// party's readiness gates the swap: not-ready responses keep the literal
/// placeholder text visible and the poll alive.
pub async fn join_content(
    State(state): State<AppState>,
    Query(params): Query<JoinContentParams>,
) -> Response {
    let Some(raw_code) = params.code else {
        return terminal(join::join_form());
    };

    let code = match JoinCode::parse(&raw_code) {
        Ok(code) => code,
        Err(err) => {
            return terminal(join::join_error(&err.to_string()));
        }
    };

    let Some(party) = state.parties.party_by_code(&code).await else {
        return terminal(join::join_error(&format!(
            "No watch party found for code {code}"
        )));
    };

    match party.join_readiness(state.parties.min_join_buffer_secs()) {
        JoinReadiness::Ready => terminal(join::party_lobby(&party)),
        JoinReadiness::NotReady { message, .. } => {
            Html(join::loading_placeholder(Some(&message))).into_response()
        }
    }
}

/// Wraps a fragment in the status code that stops the HTMX poll.
fn terminal(fragment: String) -> Response {
    let mut response = Html(fragment).into_response();
    *response.status_mut() = StatusCode::from_u16(STOP_POLLING).unwrap_or(StatusCode::OK);
    response
}
