mod common;

use axum::http::{Method, StatusCode};
use common::{StubRegistry, create_served_app};
use serde_json::{Value, json};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::test]
async fn test_preflight_does_not_spend_rate_limit() {
    let app = create_served_app(StubRegistry::default(), TIMEOUT);

    for _ in 0..40 {
        let response = app
            .server
            .method(Method::OPTIONS, "/api/domains/check")
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    app.server
        .get("/api/domains/check")
        .add_query_param("domain", "a.com")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_rate_limited_response_carries_cors_headers() {
    let app = create_served_app(StubRegistry::default(), TIMEOUT);

    let mut limited = None;
    for _ in 0..40 {
        let response = app
            .server
            .get("/api/domains/check")
            .add_query_param("domain", "a.com")
            .await;
        if response.status_code() == StatusCode::TOO_MANY_REQUESTS {
            limited = Some(response);
            break;
        }
    }

    let response = limited.expect("burst of 40 requests is throttled");
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert!(response.maybe_header("access-control-allow-methods").is_some());
}

#[tokio::test]
async fn test_timeout_is_json_with_cors_headers() {
    let app = create_served_app(
        StubRegistry::default().with_latency(Duration::from_secs(3)),
        Duration::from_millis(200),
    );

    let response = app
        .server
        .get("/api/domains/check")
        .add_query_param("domain", "slow.com")
        .await;

    assert_eq!(response.status_code(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(response.json::<Value>(), json!({ "message": "Request timed out" }));
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_health_and_trailing_slash_through_full_stack() {
    let app = create_served_app(StubRegistry::default(), TIMEOUT);

    let health = app.server.get("/health/").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "healthy");
    assert_eq!(health.header("access-control-allow-origin"), "*");

    let check = app
        .server
        .get("/api/domains/check/")
        .add_query_param("domain", "a.com")
        .await;
    check.assert_status_ok();
    assert_eq!(app.registry.checked(), vec!["a.com".to_string()]);
}
