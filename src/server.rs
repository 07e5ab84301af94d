//! HTTP server initialization and runtime setup.
//!
//! Handles upstream client construction, service wiring, and Axum server lifecycle.

use crate::application::services::{BrandService, DomainService};
use crate::config::Config;
use crate::domain::clients::TextModel;
use crate::infrastructure::model::{BedrockTextModel, NullTextModel};
use crate::infrastructure::registry::Route53Registry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the services described by `config`.
///
/// Initializes:
/// - Route 53 Domains registry client
/// - Bedrock text model (or NullTextModel when `MODEL_ID` is unset)
/// - Domain and brand services
pub async fn build_services(config: &Config) -> (DomainService, BrandService) {
    let registry = Route53Registry::from_region(config.registry_region.clone()).await;
    tracing::info!(region = %config.registry_region, "Registry client ready (Route 53 Domains)");

    let model: Arc<dyn TextModel> = match &config.model_id {
        Some(model_id) => {
            let model = BedrockTextModel::from_env(
                model_id.clone(),
                config.model_region.clone(),
                config.inference_settings(),
            )
            .await;
            tracing::info!(model_id = %model.model_id(), "Text model ready (Bedrock)");
            Arc::new(model)
        }
        None => {
            tracing::warn!("MODEL_ID is not set, brand generation is disabled");
            Arc::new(NullTextModel::new())
        }
    };

    let domain_service = DomainService::new(Arc::new(registry))
        .with_default_delay(config.batch_delay())
        .with_pending_retries(config.pending_retries);
    let brand_service = BrandService::new(model, config.model_output_format);

    (domain_service, brand_service)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Settings cannot be converted (invalid CORS origin)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (domain_service, brand_service) = build_services(&config).await;

    let state = AppState::new(Arc::new(domain_service), Arc::new(brand_service))
        .with_settings(config.api_settings()?);

    let app = app_router(state, config.behind_proxy, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
