//! Integration tests for the HTTP responder.
//!
//! Tests drive the real router through tower's `oneshot` without binding a
//! socket. Root-route tests tolerate hosts whose own hostname has no DNS
//! entry; in that environment the typed 500 error body is the contract.

use std::sync::Mutex;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use beacon::config::AppConfig;
use beacon::routes::create_router;
use beacon::state::AppState;

/// Serializes tests that read or write the `ENV` process variable, since the
/// test harness runs tests concurrently.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn setup() -> axum::Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_returns_exact_ok_body() {
    let response = get(setup(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], br#"{"status":"ok"}"#);
}

#[tokio::test]
async fn health_responses_are_never_cached() {
    let response = get(setup(), "/health").await;
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn info_reports_constant_identity() {
    let response = get(setup(), "/info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["server"], "Flask Backend");
    assert_eq!(json["version"], "1.0.0");
    assert!(!json["hostname"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn info_is_constant_across_calls() {
    let first = body_json(get(setup(), "/info").await).await;
    let second = body_json(get(setup(), "/info").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn root_reports_environment_per_request() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    std::env::remove_var("ENV");
    let response = get(setup(), "/").await;
    if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
        // Hostname has no address here; assert the typed error path instead.
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert!(!json["message"].as_str().unwrap().is_empty());
        return;
    }

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["message"], "Backend server is running!");
    assert_eq!(json["environment"], "dev");
    assert!(!json["hostname"].as_str().unwrap().is_empty());
    assert!(!json["ip"].as_str().unwrap().is_empty());

    // A changed ENV must be visible on the next request without a restart.
    std::env::set_var("ENV", "prod");
    let json = body_json(get(setup(), "/").await).await;
    assert_eq!(json["environment"], "prod");

    std::env::set_var("ENV", "staging");
    let json = body_json(get(setup(), "/").await).await;
    assert_eq!(json["environment"], "staging");

    std::env::remove_var("ENV");
}

#[tokio::test]
async fn hostname_is_stable_across_routes() {
    let info_json = body_json(get(setup(), "/info").await).await;

    let response = get(setup(), "/").await;
    if response.status() == StatusCode::OK {
        let root_json = body_json(response).await;
        assert_eq!(root_json["hostname"], info_json["hostname"]);
    }
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(setup(), "/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_health_checks_are_independent() {
    let app = setup();

    let responses =
        futures::future::join_all((0..100).map(|_| get(app.clone(), "/health"))).await;

    for response in responses {
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }
}
