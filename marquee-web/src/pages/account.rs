//! Account and settings pages - billing, events, languages, integrations,
//! security

use axum::extract::State;
use axum::response::Html;

use super::render_page;
use crate::components::account;
use crate::routes::{ContentComponent, binding_for};
use crate::server::AppState;

/// Renders the billing address page.
pub async fn billing_address_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::BillingAddressView);
    render_page(binding, &account::billing_address_view())
}

/// Renders the event scheduling page.
pub async fn events_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::EventSchedulingSystem);
    render_page(binding, &account::event_scheduling_system())
}

/// Renders the language settings page.
pub async fn i18n_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::MultiLanguageSystem);
    render_page(binding, &account::multi_language_system())
}

/// Renders the integrations page.
pub async fn integrations_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::IntegrationApiSystem);
    render_page(binding, &account::integration_api_system())
}

/// Renders the security settings page.
pub async fn security_page(State(_state): State<AppState>) -> Html<String> {
    let binding = binding_for(ContentComponent::AdvancedSecuritySystem);
    render_page(binding, &account::advanced_security_system())
}
