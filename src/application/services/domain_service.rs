//! Domain availability, suggestion and pricing service.

use crate::domain::clients::{DomainRegistry, RegistryError};
use crate::domain::entities::{AvailabilityStatus, DomainCheckResult, DomainSuggestion, TldPrice};
use crate::domain::pacing::{Pacer, TokioPacer};
use crate::error::AppError;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;

/// Default pause between two registry calls of a batch.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound on price pages fetched for one request.
const MAX_PRICE_PAGES: usize = 50;

/// Outcome of one availability attempt, as seen by the PENDING retry loop.
#[derive(Debug)]
enum Attempt {
    Pending(AvailabilityStatus),
    Failed(RegistryError),
}

/// Service wrapping a [`DomainRegistry`].
///
/// Handles:
/// - Single and batch availability checks (batch calls are sequential and paced)
/// - Domain name suggestions (failures degrade to an empty list)
/// - TLD price listing with pagination, filtering and sorting
pub struct DomainService {
    registry: Arc<dyn DomainRegistry>,
    pacer: Arc<dyn Pacer>,
    default_delay: Duration,
    pending_retries: usize,
}

impl DomainService {
    /// Creates a service that sleeps on the Tokio timer between batch calls.
    pub fn new(registry: Arc<dyn DomainRegistry>) -> Self {
        Self::with_pacer(registry, Arc::new(TokioPacer))
    }

    pub fn with_pacer(registry: Arc<dyn DomainRegistry>, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            registry,
            pacer,
            default_delay: DEFAULT_BATCH_DELAY,
            pending_retries: 0,
        }
    }

    /// Overrides the pause used when a batch request does not set one.
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    /// Re-checks a `PENDING` status up to `retries` times, two delays apart.
    pub fn with_pending_retries(mut self, retries: usize) -> Self {
        self.pending_retries = retries;
        self
    }

    pub fn default_delay(&self) -> Duration {
        self.default_delay
    }

    /// Checks availability of a single domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with status 400 when the registry rejects
    /// the name or TLD, and with status 500 for any other registry failure.
    pub async fn check_domain(&self, domain: &str) -> Result<DomainCheckResult, AppError> {
        tracing::info!(domain, "Checking domain availability");

        match self.availability(domain, self.default_delay).await {
            Ok(status) => {
                tracing::debug!(domain, status = %status, "Availability received");
                Ok(DomainCheckResult::from_status(domain, &status))
            }
            Err(RegistryError::InvalidDomain(reason)) => {
                tracing::info!(domain, reason = %reason, "Registry rejected domain");
                Err(AppError::Upstream {
                    status: StatusCode::BAD_REQUEST,
                    message: "Invalid domain name or TLD".to_string(),
                    details: Some(json!({ "domain": domain })),
                })
            }
            Err(RegistryError::Upstream(reason)) => {
                tracing::error!(domain, reason = %reason, "Domain availability check failed");
                Err(AppError::upstream("Failed to check domain availability."))
            }
        }
    }

    /// Checks domains one after another, pausing `delay` between calls.
    ///
    /// Results follow input order. A failure for one domain is recorded in
    /// that domain's result and the batch continues.
    pub async fn check_domains(&self, domains: &[String], delay: Duration) -> Vec<DomainCheckResult> {
        tracing::info!(count = domains.len(), delay_ms = delay.as_millis() as u64, "Checking domain batch");

        let mut results = Vec::with_capacity(domains.len());

        for (index, domain) in domains.iter().enumerate() {
            if index > 0 {
                self.pacer.pause(delay).await;
            }

            let result = match self.availability(domain, delay).await {
                Ok(status) => DomainCheckResult::from_status(domain.as_str(), &status),
                Err(e) => {
                    tracing::warn!(domain = %domain, error = %e, "Batch check failed for domain");
                    DomainCheckResult::failed(domain.as_str(), e.to_string())
                }
            };
            results.push(result);
        }

        results
    }

    /// Fetches domain name suggestions for `query`.
    ///
    /// Suggestion failures are not fatal: they are logged and an empty list
    /// is returned.
    pub async fn get_domain_suggestions(
        &self,
        query: &str,
        only_available: bool,
        count: u32,
    ) -> Vec<DomainSuggestion> {
        tracing::info!(query, only_available, count, "Fetching domain suggestions");

        match self.registry.suggest_domains(query, only_available, count).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(query, error = %e, "Domain suggestions unavailable");
                Vec::new()
            }
        }
    }

    /// Lists TLD prices, optionally restricted to one TLD.
    ///
    /// Follows the registry's page markers until exhausted, keeps entries
    /// matching `tld` case-insensitively when given, and sorts by TLD.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when any page fails to load.
    pub async fn get_tld_prices(&self, tld: Option<&str>) -> Result<Vec<TldPrice>, AppError> {
        let filter = tld
            .map(|t| t.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|t| !t.is_empty());
        tracing::info!(tld = filter.as_deref().unwrap_or("all"), "Fetching TLD prices");

        let mut prices = Vec::new();
        let mut marker: Option<String> = None;

        for page_number in 1..=MAX_PRICE_PAGES {
            let page = self
                .registry
                .list_prices(filter.clone(), marker.take())
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, page_number, "Failed to list TLD prices");
                    AppError::upstream("Failed to fetch TLD prices.")
                })?;

            tracing::debug!(page_number, count = page.prices.len(), "Price page received");
            prices.extend(page.prices);

            // A single-TLD listing is never paged.
            if filter.is_some() {
                break;
            }

            match page.next_marker.filter(|m| !m.is_empty()) {
                Some(next) => marker = Some(next),
                None => break,
            }

            if page_number == MAX_PRICE_PAGES {
                tracing::warn!(pages = MAX_PRICE_PAGES, "Stopped paginating TLD prices");
            }
        }

        prices.retain(|p| !p.tld.is_empty());
        if let Some(filter) = &filter {
            prices.retain(|p| p.matches_tld(filter));
        }
        prices.sort_by(|a, b| a.tld.cmp(&b.tld));

        Ok(prices)
    }

    /// One availability lookup, re-checking `PENDING` when retries are enabled.
    async fn availability(
        &self,
        domain: &str,
        delay: Duration,
    ) -> Result<AvailabilityStatus, RegistryError> {
        if self.pending_retries == 0 {
            return self.registry.check_availability(domain).await;
        }

        let registry = &self.registry;
        let strategy = FixedInterval::new(delay * 2).take(self.pending_retries);

        let outcome = RetryIf::start(
            strategy,
            || async move {
                match registry.check_availability(domain).await {
                    Ok(status) if status.is_pending() => {
                        tracing::debug!(domain, "Status is PENDING, retrying");
                        Err(Attempt::Pending(status))
                    }
                    Ok(status) => Ok(status),
                    Err(e) => Err(Attempt::Failed(e)),
                }
            },
            |attempt: &Attempt| matches!(attempt, Attempt::Pending(_)),
        )
        .await;

        match outcome {
            Ok(status) | Err(Attempt::Pending(status)) => Ok(status),
            Err(Attempt::Failed(e)) => Err(e),
        }
    }
}
