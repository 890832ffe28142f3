//! Admin pages - moderation reports, party administration, user management

use axum::extract::State;
use axum::response::Html;

use super::render_page;
use crate::components::admin;
use crate::routes::{ContentComponent, binding_for};
use crate::server::AppState;

/// Renders the moderation reports page.
pub async fn moderation_reports_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::ModerationReports);
    render_page(binding, &admin::moderation_reports())
}

/// Renders the admin view over all active parties.
pub async fn admin_parties_page(State(state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::AdminPartiesView);
    let parties = state.parties.active_parties().await;
    let content = admin::admin_parties_view(&parties, state.parties.min_join_buffer_secs());
    render_page(binding, &content)
}

/// Renders the user management page.
pub async fn user_management_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::UserManagement);
    render_page(binding, &admin::user_management())
}
