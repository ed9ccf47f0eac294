//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use clario_api::app::build_router;
use clario_api::state::AppState;
use common::{body_json, get, test_config, Outcome, RecordingMailer};
use tower::ServiceExt;

fn app_with_origins(origins: &[&str]) -> Router {
    let config = clario_api::config::ServerConfig {
        cors_origins: origins.iter().map(|o| o.to_string()).collect(),
        ..test_config()
    };
    let state = AppState {
        config: Arc::new(config),
        mailer: RecordingMailer::new(Outcome::Deliver),
    };
    build_router(state).unwrap()
}

async fn preflight(app: Router, origin: &str, request_headers: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/suggestions")
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", request_headers)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with status ok
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok() {
    let app = common::build_test_app(RecordingMailer::new(Outcome::Deliver));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: health does not depend on mail configuration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_is_ok_without_smtp_credentials() {
    let app = common::build_unconfigured_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(RecordingMailer::new(Outcome::Deliver));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: GET on the intake endpoint is not allowed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_suggestions_returns_405() {
    let app = common::build_test_app(RecordingMailer::new(Outcome::Deliver));
    let response = get(app, "/suggestions").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(RecordingMailer::new(Outcome::Deliver));
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight from any origin is allowed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = common::build_test_app(RecordingMailer::new(Outcome::Deliver));

    let response = preflight(app, "https://some-frontend.example", "content-type").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header")
            .to_str()
            .unwrap(),
        "*"
    );

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows arbitrary request headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_any_request_header() {
    let app = common::build_test_app(RecordingMailer::new(Outcome::Deliver));

    let response = preflight(
        app,
        "https://some-frontend.example",
        "content-type,x-client-version",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-headers")
            .expect("Missing Access-Control-Allow-Headers header")
            .to_str()
            .unwrap(),
        "*"
    );
}

// ---------------------------------------------------------------------------
// Test: explicit CORS origin list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_echoes_a_listed_origin() {
    let app = app_with_origins(&["https://clario.app", "https://admin.clario.app"]);

    let response = preflight(app, "https://clario.app", "content-type").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Listed origin must be allowed")
            .to_str()
            .unwrap(),
        "https://clario.app"
    );
}

#[tokio::test]
async fn cors_preflight_ignores_an_unlisted_origin() {
    let app = app_with_origins(&["https://clario.app"]);

    let response = preflight(app, "https://evil.example", "content-type").await;

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none(),
        "Unlisted origin must not be allowed"
    );
}

#[tokio::test]
async fn unparsable_cors_origin_fails_router_construction() {
    let config = clario_api::config::ServerConfig {
        cors_origins: vec!["https://clario.app\nX-Injected: 1".to_string()],
        ..test_config()
    };
    let state = AppState {
        config: Arc::new(config),
        mailer: RecordingMailer::new(Outcome::Deliver),
    };

    assert!(build_router(state).is_err());
}
