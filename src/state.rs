//! Shared application state injected into every handler.

use axum::http::HeaderValue;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{BrandService, DomainService};

/// Request-level limits and settings read by handlers and middleware.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Value sent in `Access-Control-Allow-Origin`.
    pub cors_allow_origin: HeaderValue,
    /// Largest number of domains accepted by one batch check.
    pub batch_max_domains: usize,
    /// Largest `delayMs` accepted by one batch check.
    pub batch_max_delay: Duration,
    /// Per-request deadline; a batch whose pauses alone reach it is refused.
    pub request_timeout: Duration,
    /// Reported by the health check.
    pub registry_region: String,
    /// Reported by the health check; `None` when brand generation is disabled.
    pub model_id: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            cors_allow_origin: HeaderValue::from_static("*"),
            batch_max_domains: 50,
            batch_max_delay: Duration::from_millis(10_000),
            request_timeout: Duration::from_secs(60),
            registry_region: "us-east-1".to_string(),
            model_id: None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub domain_service: Arc<DomainService>,
    pub brand_service: Arc<BrandService>,
    pub settings: Arc<ApiSettings>,
}

impl AppState {
    pub fn new(domain_service: Arc<DomainService>, brand_service: Arc<BrandService>) -> Self {
        Self {
            domain_service,
            brand_service,
            settings: Arc::new(ApiSettings::default()),
        }
    }

    pub fn with_settings(mut self, settings: ApiSettings) -> Self {
        self.settings = Arc::new(settings);
        self
    }
}
