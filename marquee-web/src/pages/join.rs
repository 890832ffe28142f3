//! Join page - the deferred-rendering route
//!
//! The page itself is instant: it ships the loading placeholder and lets the
//! HTMX partial swap in the real content once the party is ready.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use super::render_page;
use crate::components::join;
use crate::routes::{ContentComponent, binding_for};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct JoinPageQuery {
    pub code: Option<String>,
}

/// Renders the join page shell.
///
/// Shows the placeholder until the join content partial reports readiness;
/// an optional `code` query parameter is forwarded to the partial untouched.
pub async fn join_page(
    State(_state): State<AppState>,
    Query(query): Query<JoinPageQuery>,
) -> Html<String> {
    let binding = binding_for(ContentComponent::JoinParty);
    render_page(binding, &join::join_shell(query.code.as_deref()))
}
