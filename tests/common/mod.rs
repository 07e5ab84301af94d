#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use brand_boffin::api::routes::router;
use brand_boffin::prelude::*;
use brand_boffin::routes::app_router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Registry double answering from fixed tables and recording every call.
#[derive(Default)]
pub struct StubRegistry {
    pub statuses: HashMap<String, Result<String, RegistryError>>,
    pub suggestions: Option<Result<Vec<DomainSuggestion>, RegistryError>>,
    /// Pages keyed by the marker that requests them; `None` is the first page.
    pub price_pages: HashMap<Option<String>, Result<PricePage, RegistryError>>,
    /// Delay before every availability answer.
    pub latency: Option<Duration>,
    pub checked: Mutex<Vec<String>>,
    pub suggestion_calls: Mutex<Vec<(String, bool, u32)>>,
    pub price_calls: Mutex<Vec<(Option<String>, Option<String>)>>,
}

impl StubRegistry {
    pub fn with_status(mut self, domain: &str, status: &str) -> Self {
        self.statuses
            .insert(domain.to_string(), Ok(status.to_string()));
        self
    }

    pub fn with_error(mut self, domain: &str, error: RegistryError) -> Self {
        self.statuses.insert(domain.to_string(), Err(error));
        self
    }

    pub fn with_suggestions(mut self, suggestions: Result<Vec<DomainSuggestion>, RegistryError>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    pub fn with_price_page(mut self, marker: Option<&str>, page: Result<PricePage, RegistryError>) -> Self {
        self.price_pages.insert(marker.map(str::to_string), page);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl DomainRegistry for StubRegistry {
    async fn check_availability(&self, domain: &str) -> Result<AvailabilityStatus, RegistryError> {
        self.checked.lock().unwrap().push(domain.to_string());
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.statuses.get(domain) {
            Some(Ok(status)) => Ok(AvailabilityStatus::new(status.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(AvailabilityStatus::new("UNAVAILABLE")),
        }
    }

    async fn suggest_domains(
        &self,
        query: &str,
        only_available: bool,
        count: u32,
    ) -> Result<Vec<DomainSuggestion>, RegistryError> {
        self.suggestion_calls
            .lock()
            .unwrap()
            .push((query.to_string(), only_available, count));
        self.suggestions.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_prices(
        &self,
        tld: Option<String>,
        marker: Option<String>,
    ) -> Result<PricePage, RegistryError> {
        self.price_calls
            .lock()
            .unwrap()
            .push((tld, marker.clone()));
        self.price_pages.get(&marker).cloned().unwrap_or_else(|| {
            Ok(PricePage {
                prices: Vec::new(),
                next_marker: None,
            })
        })
    }
}

/// Text model double returning a fixed answer.
pub struct StubModel {
    pub response: Result<String, ModelError>,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl StubModel {
    pub fn answering(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ModelError) -> Self {
        Self {
            response: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for StubModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        self.response.clone()
    }
}

/// Pacer that records pauses instead of sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    pub pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub registry: Arc<StubRegistry>,
    pub model: Arc<StubModel>,
    pub pacer: Arc<RecordingPacer>,
}

pub fn create_test_app(registry: StubRegistry, model: StubModel, format: OutputFormat) -> TestApp {
    create_test_app_with_settings(registry, model, format, ApiSettings::default())
}

pub fn create_test_app_with_settings(
    registry: StubRegistry,
    model: StubModel,
    format: OutputFormat,
    settings: ApiSettings,
) -> TestApp {
    let registry = Arc::new(registry);
    let model = Arc::new(model);
    let pacer = Arc::new(RecordingPacer::default());

    let domain_service = DomainService::with_pacer(registry.clone(), pacer.clone());
    let brand_service = BrandService::new(model.clone(), format);

    let state = AppState::new(Arc::new(domain_service), Arc::new(brand_service))
        .with_settings(settings);

    let server = TestServer::new(router(state)).unwrap();

    TestApp {
        server,
        registry,
        model,
        pacer,
    }
}

/// App with an empty registry and a model that is never expected to be called.
pub fn create_domain_test_app(registry: StubRegistry) -> TestApp {
    create_test_app(
        registry,
        StubModel::failing(ModelError::NotConfigured("unused".to_string())),
        OutputFormat::Json,
    )
}

/// App served over a real socket through the full middleware stack: rate
/// limiting keyed by peer address, request deadline, CORS and tracing.
pub fn create_served_app(registry: StubRegistry, request_timeout: Duration) -> TestApp {
    let registry = Arc::new(registry);
    let model = Arc::new(StubModel::failing(ModelError::NotConfigured(
        "unused".to_string(),
    )));
    let pacer = Arc::new(RecordingPacer::default());

    let domain_service = DomainService::with_pacer(registry.clone(), pacer.clone());
    let brand_service = BrandService::new(model.clone(), OutputFormat::Json);
    let state = AppState::new(Arc::new(domain_service), Arc::new(brand_service));

    let app = app_router(state, false, request_timeout);
    let server = TestServer::new(
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .unwrap();

    TestApp {
        server,
        registry,
        model,
        pacer,
    }
}
