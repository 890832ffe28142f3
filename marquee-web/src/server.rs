//! HTMX + Tailwind web server for Marquee
//!
//! All pages use server-side rendering composed from the static route table;
//! HTMX partials and a small JSON API cover the real-time pieces.

use std::time::Instant;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use marquee_core::config::MarqueeConfig;
use marquee_core::party::PartyRegistry;
use marquee_core::{Result, RuntimeMode};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::handlers::{api_health, join_readiness_handler};
use crate::htmx::{admin_parties_list, join_content, monitoring_stats};
use crate::pages::{
    admin_parties_page, advanced_analytics_page, billing_address_page, content_moderation_page,
    deployment_page, documentation_page, events_page, i18n_page, integrations_page, join_page,
    moderation_reports_page, monitoring_page, security_page, testing_page, user_management_page,
    video_analytics_page, video_processing_page,
};

/// Shared application state for all handlers.
///
/// Cheap to clone; the party registry is shared across clones.
#[derive(Clone)]
pub struct AppState {
    pub parties: PartyRegistry,
    pub config: MarqueeConfig,
    pub mode: RuntimeMode,
    pub server_started_at: Instant,
}

impl AppState {
    pub fn new(config: MarqueeConfig, mode: RuntimeMode) -> Self {
        Self {
            parties: PartyRegistry::new(config.party.clone()),
            config,
            mode,
            server_started_at: Instant::now(),
        }
    }
}

/// Builds the full application router over the given state.
///
/// Page routes mirror [`crate::routes::ROUTE_TABLE`] one-to-one; everything
/// else is partials, JSON API, and static assets.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir;

    Router::new()
        .route("/", get(index_redirect))
        // Page routes (one per route table binding)
        .route("/admin/moderation/reports", get(moderation_reports_page))
        .route("/admin/parties", get(admin_parties_page))
        .route("/admin/users", get(user_management_page))
        .route("/dashboard/admin/deployment", get(deployment_page))
        .route("/dashboard/admin/documentation", get(documentation_page))
        .route("/dashboard/admin/moderation", get(content_moderation_page))
        .route("/dashboard/admin/monitoring", get(monitoring_page))
        .route("/dashboard/admin/testing", get(testing_page))
        .route(
            "/dashboard/admin/video-processing",
            get(video_processing_page),
        )
        .route("/dashboard/analytics/advanced", get(advanced_analytics_page))
        .route(
            "/dashboard/analytics/video/{video_id}",
            get(video_analytics_page),
        )
        .route("/dashboard/billing/address", get(billing_address_page))
        .route("/dashboard/events", get(events_page))
        .route("/dashboard/i18n", get(i18n_page))
        .route("/dashboard/integrations", get(integrations_page))
        .route("/dashboard/security/advanced", get(security_page))
        .route("/join", get(join_page))
        // HTMX partial update endpoints
        .route("/htmx/join/content", get(join_content))
        .route("/htmx/monitoring/stats", get(monitoring_stats))
        .route("/htmx/admin/parties", get(admin_parties_list))
        // JSON API endpoints (for external clients)
        .route("/api/health", get(api_health))
        .route("/api/join/{code}/ready", get(join_readiness_handler))
        // Static assets (minimal)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index_redirect() -> Redirect {
    Redirect::permanent("/join")
}

/// Starts the web server and serves until shutdown.
///
/// Development mode seeds demo parties so every dashboard renders offline.
///
/// # Errors
/// - `MarqueeError::Io` - Listener cannot bind or the server fails while serving
pub async fn run_server(config: MarqueeConfig, mode: RuntimeMode) -> Result<()> {
    let state = AppState::new(config.clone(), mode);

    if mode.is_development() {
        state.parties.seed_demo_parties().await;
    }

    let app = build_router(state);
    let addr = config.server.bind_addr();

    tracing::info!("Marquee server running on http://{addr} ({mode})");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
