//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status and the configured upstreams.
///
/// # Endpoint
///
/// `GET /health`
///
/// Upstreams are not called: the check reports configuration only, so it
/// stays cheap enough for load balancer probes.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "Route 53 Domains (us-east-1)" },
///     "text_model": { "status": "disabled", "message": "MODEL_ID is not set" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let settings = &state.settings;

    let registry = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Route 53 Domains ({})", settings.registry_region)),
    };

    let text_model = match &settings.model_id {
        Some(model_id) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Bedrock {model_id}, {} output",
                state.brand_service.format()
            )),
        },
        None => CheckStatus {
            status: "disabled".to_string(),
            message: Some("MODEL_ID is not set".to_string()),
        },
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry,
            text_model,
        },
    })
}
