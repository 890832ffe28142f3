//! Analytics pages

use axum::extract::{Path, State};
use axum::response::Html;

use super::render_page;
use crate::components::analytics;
use crate::routes::{ContentComponent, binding_for};
use crate::server::AppState;

/// Renders the platform-wide analytics page.
pub async fn advanced_analytics_page(State(state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::AdvancedAnalyticsDashboard);
    let parties = state.parties.active_parties().await;
    render_page(binding, &analytics::advanced_analytics_dashboard(&parties))
}

/// Renders per-video analytics.
///
/// The captured path segment is forwarded to the component verbatim - no
/// validation or coercion at this layer; the component owns interpretation.
pub async fn video_analytics_page(
    State(_state): State<AppState>,
    Path(video_id): Path<String>,
) -> Html<String> {
    let binding = binding_for(ContentComponent::VideoAnalyticsView);
    render_page(binding, &analytics::video_analytics_view(&video_id))
}
