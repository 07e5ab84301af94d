use axum::{Router, routing::get};
use axum_test::TestServer;
use brand_boffin::api::handlers::health_handler;
use brand_boffin::prelude::*;
use brand_boffin::infrastructure::model::NullTextModel;
use serde_json::Value;
use std::sync::Arc;

mod common;

fn health_server(settings: ApiSettings) -> TestServer {
    let domain_service = DomainService::new(Arc::new(common::StubRegistry::default()));
    let brand_service = BrandService::new(Arc::new(NullTextModel::new()), OutputFormat::Pairs);
    let state = AppState::new(Arc::new(domain_service), Arc::new(brand_service))
        .with_settings(settings);

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_reports_disabled_model() {
    let server = health_server(ApiSettings::default());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["registry"]["status"], "ok");
    assert_eq!(body["checks"]["text_model"]["status"], "disabled");
}

#[tokio::test]
async fn test_health_reports_configured_model() {
    let server = health_server(ApiSettings {
        model_id: Some("anthropic.claude-3-haiku-20240307-v1:0".to_string()),
        ..ApiSettings::default()
    });

    let response = server.get("/health").await;

    response.assert_status_ok();
    let model = response.json::<Value>()["checks"]["text_model"].clone();
    assert_eq!(model["status"], "ok");
    assert!(
        model["message"]
            .as_str()
            .unwrap()
            .contains("anthropic.claude-3-haiku")
    );
}
