mod common;

use axum::http::StatusCode;
use brand_boffin::prelude::{ApiSettings, ModelError, OutputFormat, RegistryError};
use common::{StubModel, StubRegistry, create_domain_test_app, create_test_app_with_settings};
use serde_json::{Value, json};
use std::time::Duration;

#[tokio::test]
async fn test_batch_preserves_order_and_paces_calls() {
    let app = create_domain_test_app(
        StubRegistry::default()
            .with_status("a.com", "AVAILABLE")
            .with_status("b.com", "UNAVAILABLE")
            .with_status("c.com", "AVAILABLE"),
    );

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com", "b.com", "c.com"], "delayMs": 250 }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "results": [
                { "domain": "a.com", "available": true },
                { "domain": "b.com", "available": false },
                { "domain": "c.com", "available": true }
            ]
        })
    );
    assert_eq!(app.registry.checked(), vec!["a.com", "b.com", "c.com"]);
    assert_eq!(
        app.pacer.pauses(),
        vec![Duration::from_millis(250), Duration::from_millis(250)]
    );
}

#[tokio::test]
async fn test_batch_uses_default_delay() {
    let app = create_domain_test_app(StubRegistry::default());

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com", "b.com"] }))
        .await;

    response.assert_status_ok();
    assert_eq!(app.pacer.pauses(), vec![Duration::from_millis(1000)]);
}

#[tokio::test]
async fn test_single_domain_batch_does_not_pause() {
    let app = create_domain_test_app(StubRegistry::default());

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["only.com"], "delayMs": 0 }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["results"].as_array().unwrap().len(), 1);
    assert!(app.pacer.pauses().is_empty());
}

#[tokio::test]
async fn test_one_failure_does_not_abort_batch() {
    let app = create_domain_test_app(
        StubRegistry::default()
            .with_status("a.com", "AVAILABLE")
            .with_error("b.zzz", RegistryError::InvalidDomain("unsupported TLD".to_string()))
            .with_status("c.com", "AVAILABLE"),
    );

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com", "b.zzz", "c.com"], "delayMs": 0 }))
        .await;

    response.assert_status_ok();
    let results = response.json::<Value>()["results"].clone();
    assert_eq!(results[0]["available"], true);
    assert_eq!(results[1]["domain"], "b.zzz");
    assert_eq!(results[1]["available"], false);
    assert!(results[1]["error"].is_string());
    assert_eq!(results[2]["available"], true);
    assert!(results[2].get("error").is_none());
}

#[tokio::test]
async fn test_entries_are_trimmed() {
    let app = create_domain_test_app(StubRegistry::default());

    app.server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["  a.com ", "b.com\n"], "delayMs": 0 }))
        .await
        .assert_status_ok();

    assert_eq!(app.registry.checked(), vec!["a.com", "b.com"]);
}

#[tokio::test]
async fn test_empty_batch_is_rejected_without_registry_calls() {
    let app = create_domain_test_app(StubRegistry::default());

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Domains array is required and must not be empty"
    );
    assert!(app.registry.checked().is_empty());
}

#[tokio::test]
async fn test_missing_domains_is_rejected() {
    let app = create_domain_test_app(StubRegistry::default());

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "delayMs": 100 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Domains array is required and must not be empty"
    );
}

#[tokio::test]
async fn test_blank_or_non_string_entry_is_rejected() {
    let app = create_domain_test_app(StubRegistry::default());

    for domains in [json!(["a.com", "   "]), json!(["a.com", 42])] {
        let response = app
            .server
            .post("/api/domains/check-batch")
            .json(&json!({ "domains": domains }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "All domains in the array must be non-empty strings"
        );
    }
    assert!(app.registry.checked().is_empty());
}

#[tokio::test]
async fn test_batch_limits_are_enforced() {
    let settings = ApiSettings {
        batch_max_domains: 2,
        batch_max_delay: Duration::from_millis(500),
        ..ApiSettings::default()
    };
    let app = create_test_app_with_settings(
        StubRegistry::default(),
        StubModel::failing(ModelError::NotConfigured("unused".to_string())),
        OutputFormat::Json,
        settings,
    );

    let too_many = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com", "b.com", "c.com"] }))
        .await;
    assert_eq!(too_many.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(too_many.json::<Value>()["details"]["max"], 2);

    let too_slow = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com"], "delayMs": 501 }))
        .await;
    assert_eq!(too_slow.status_code(), StatusCode::BAD_REQUEST);

    assert!(app.registry.checked().is_empty());
}

#[tokio::test]
async fn test_batch_outlasting_request_timeout_is_rejected() {
    let settings = ApiSettings {
        request_timeout: Duration::from_secs(5),
        ..ApiSettings::default()
    };
    let app = create_test_app_with_settings(
        StubRegistry::default(),
        StubModel::failing(ModelError::NotConfigured("unused".to_string())),
        OutputFormat::Json,
        settings,
    );

    let response = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com", "b.com", "c.com"], "delayMs": 2500 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["details"]["pausesMs"], 5000);
    assert_eq!(body["details"]["timeoutMs"], 5000);
    assert!(app.registry.checked().is_empty());

    let fits = app
        .server
        .post("/api/domains/check-batch")
        .json(&json!({ "domains": ["a.com", "b.com", "c.com"], "delayMs": 2000 }))
        .await;

    fits.assert_status_ok();
    assert_eq!(app.registry.checked().len(), 3);
}

#[tokio::test]
async fn test_batch_rejects_get() {
    let app = create_domain_test_app(StubRegistry::default());

    let response = app.server.get("/api/domains/check-batch").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.json::<Value>(), json!({ "message": "Method Not Allowed" }));
}
