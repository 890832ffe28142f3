//! Operations dashboard pages - deployment, documentation, moderation
//! system, monitoring, testing, video processing

use axum::extract::State;
use axum::response::Html;

use super::render_page;
use crate::components::operations;
use crate::routes::{ContentComponent, binding_for};
use crate::server::AppState;

/// Renders the deployment pipeline page.
pub async fn deployment_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::DeploymentPipeline);
    render_page(binding, &operations::deployment_pipeline())
}

/// Renders the documentation manager page.
pub async fn documentation_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::DocumentationManager);
    render_page(binding, &operations::documentation_manager())
}

/// Renders the automated content moderation page.
pub async fn content_moderation_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::ContentModerationSystem);
    render_page(binding, &operations::content_moderation_system())
}

/// Renders the live monitoring dashboard page.
pub async fn monitoring_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::MonitoringDashboard);
    render_page(binding, &operations::monitoring_dashboard())
}

/// Renders the testing suite dashboard page.
pub async fn testing_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::TestingSuiteDashboard);
    render_page(binding, &operations::testing_suite_dashboard())
}

/// Renders the video processing pipeline page.
pub async fn video_processing_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::VideoProcessingPipeline);
    render_page(binding, &operations::video_processing_pipeline())
}
