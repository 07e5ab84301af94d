mod common;

use axum::http::StatusCode;
use brand_boffin::prelude::{ModelError, OutputFormat};
use common::{StubModel, StubRegistry, create_test_app};
use serde_json::{Value, json};

const THREE_PAIRS: &str = "Brand Name: Lumora\nTagline: Light up your day\n\n\
    Brand Name: Verdana Trail\nTagline: Walk the green path\n\n\
    Brand Name: Quillo\nTagline: Write it forward";

#[tokio::test]
async fn test_pairs_output_is_truncated_to_count() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering(THREE_PAIRS),
        OutputFormat::Pairs,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "eco travel gear", "count": 2 }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "suggestions": [
                { "name": "Lumora", "tagline": "Light up your day" },
                { "name": "Verdana Trail", "tagline": "Walk the green path" }
            ]
        })
    );
}

#[tokio::test]
async fn test_json_output_includes_domains() {
    let output = r#"[
        {"name": "Brewtopia", "tagline": "Coffee, reimagined", "suggestedDomains": ["brewtopia.com", "getbrewtopia.io"]},
        {"name": "Broken", "tagline": 7, "suggestedDomains": []}
    ]"#;
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering(output),
        OutputFormat::Json,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "specialty coffee", "industry": "food", "keywords": ["bean"] }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "suggestions": [{
                "name": "Brewtopia",
                "tagline": "Coffee, reimagined",
                "suggestedDomains": ["brewtopia.com", "getbrewtopia.io"]
            }]
        })
    );

    let prompts = app.model.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].1.contains("specialty coffee"));
    assert!(prompts[0].1.contains("food"));
    assert!(prompts[0].1.contains("bean"));
}

#[tokio::test]
async fn test_unparsable_output_returns_empty_list() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering("Sure! Here are some ideas: Lumora, Quillo"),
        OutputFormat::Json,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "stationery" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "suggestions": [] }));
}

#[tokio::test]
async fn test_blank_prompt_is_bad_request() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering(THREE_PAIRS),
        OutputFormat::Pairs,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Prompt is required and must be a non-empty string"
    );
    assert!(app.model.prompts().is_empty());
}

#[tokio::test]
async fn test_count_out_of_range_is_bad_request() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering(THREE_PAIRS),
        OutputFormat::Pairs,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "tea", "count": 21 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Request validation failed");
    assert_eq!(body["details"]["fields"], json!(["count"]));
}

#[tokio::test]
async fn test_model_failure_is_500() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::failing(ModelError::Request("AccessDeniedException".to_string())),
        OutputFormat::Json,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "tea" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text();
    assert!(text.contains("Failed to generate brand name suggestions."));
    assert!(!text.contains("AccessDenied"));
}

#[tokio::test]
async fn test_unconfigured_model_is_500() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::failing(ModelError::NotConfigured("MODEL_ID is not set".to_string())),
        OutputFormat::Json,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "tea" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "Brand name generation is not configured."
    );
}

#[tokio::test]
async fn test_wrong_shape_is_bad_request() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering(THREE_PAIRS),
        OutputFormat::Pairs,
    );

    let response = app
        .server
        .post("/api/brands/suggestions")
        .json(&json!({ "prompt": "tea", "keywords": "not-a-list" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Request body has an invalid shape");
    assert!(body["details"]["error"].is_string());
}

#[tokio::test]
async fn test_brands_rejects_get() {
    let app = create_test_app(
        StubRegistry::default(),
        StubModel::answering(THREE_PAIRS),
        OutputFormat::Pairs,
    );

    let response = app.server.get("/api/brands/suggestions").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
