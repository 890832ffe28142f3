//! End-to-end page rendering tests over the real router
//!
//! Drives the full axum router with in-memory requests and asserts the
//! route table's promises: every path renders its component with its
//! declared metadata, the video parameter passes through verbatim, and the
//! join flow swaps its placeholder exactly when a party becomes ready.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use marquee_core::RuntimeMode;
use marquee_core::config::MarqueeConfig;
use marquee_web::routes::ROUTE_TABLE;
use marquee_web::{AppState, build_router};
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(MarqueeConfig::default(), RuntimeMode::Production)
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn every_route_renders_its_declared_metadata() {
    let state = test_state();

    for binding in ROUTE_TABLE {
        let uri = binding.path.replace("{video_id}", "sample-video");
        let (status, body) = get(build_router(state.clone()), &uri).await;

        assert_eq!(status, StatusCode::OK, "route {} failed", binding.path);
        if let Some(metadata) = binding.metadata {
            assert!(
                body.contains(metadata.title),
                "route {} missing title '{}'",
                binding.path,
                metadata.title
            );
            assert!(
                body.contains(metadata.description),
                "route {} missing description",
                binding.path
            );
        }
        if let Some(heading) = binding.heading {
            assert!(
                body.contains(heading),
                "route {} missing heading '{heading}'",
                binding.path
            );
        }
    }
}

#[tokio::test]
async fn video_route_forwards_parameter_verbatim() {
    let (status, body) = get(
        build_router(test_state()),
        "/dashboard/analytics/video/abc123",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("abc123"));
}

#[tokio::test]
async fn join_page_shows_loading_placeholder() {
    let (status, body) = get(build_router(test_state()), "/join").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading..."));
    assert!(body.contains("/htmx/join/content"));
}

#[tokio::test]
async fn join_partial_without_code_serves_form() {
    let (status, body) = get(build_router(test_state()), "/htmx/join/content").await;

    // Terminal response: HTMX stops polling
    assert_eq!(status.as_u16(), 286);
    assert!(body.contains("Join a Watch Party"));
}

#[tokio::test]
async fn join_partial_keeps_placeholder_until_party_is_ready() {
    let state = test_state();
    let party = state
        .parties
        .create_party("Movie Night", "ava", "Interstellar (2014)")
        .await;
    let uri = format!("/htmx/join/content?code={}", party.code);

    // Freshly created party: host not connected, nothing buffered
    let (status, body) = get(build_router(state.clone()), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading..."));
    assert!(body.contains("Waiting for host"));

    // Make the party ready and poll again: placeholder replaced, poll stopped
    state.parties.mark_host_connected(&party.code, true).await;
    state.parties.update_buffer(&party.code, 30.0).await;

    let (status, body) = get(build_router(state), &uri).await;
    assert_eq!(status.as_u16(), 286);
    assert!(body.contains("Movie Night"));
    assert!(!body.contains("Loading..."));
}

#[tokio::test]
async fn join_partial_rejects_unknown_code_terminally() {
    let (status, body) = get(
        build_router(test_state()),
        "/htmx/join/content?code=ZZZZZZ",
    )
    .await;

    assert_eq!(status.as_u16(), 286);
    assert!(body.contains("Unable to Join"));
}

#[tokio::test]
async fn readiness_endpoint_reports_progress() {
    let state = test_state();
    let party = state
        .parties
        .create_party("Movie Night", "ava", "Interstellar (2014)")
        .await;

    let uri = format!("/api/join/{}/ready", party.code);
    let (status, body) = get(build_router(state.clone()), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ready"], false);
    assert!(json["message"].as_str().unwrap().contains("Waiting for host"));

    state.parties.mark_host_connected(&party.code, true).await;
    state.parties.update_buffer(&party.code, 30.0).await;

    let (_, body) = get(build_router(state), &uri).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ready"], true);
    assert_eq!(json["progress"], 1.0);
}

#[tokio::test]
async fn readiness_endpoint_tolerates_malformed_codes() {
    let (status, body) = get(build_router(test_state()), "/api/join/!!!/ready").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ready"], false);
    assert_eq!(json["message"], "Invalid join code");
}

#[tokio::test]
async fn health_endpoint_counts_parties() {
    let state = test_state();
    state.parties.create_party("A", "ava", "x.mkv").await;
    state.parties.create_party("B", "ben", "y.mkv").await;

    let (status, body) = get(build_router(state), "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["active_parties"], 2);
}

#[tokio::test]
async fn root_redirects_to_join() {
    let (status, _) = get(build_router(test_state()), "/").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
}
