//! Domain registry interface.

use crate::domain::entities::{AvailabilityStatus, DomainSuggestion, PricePage};
use async_trait::async_trait;

/// Errors reported by a domain registry client.
///
/// Messages are already sanitized: they never contain raw SDK output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// The registry rejected the domain name or does not support its TLD.
    #[error("Invalid domain name or TLD: {0}")]
    InvalidDomain(String),

    /// Any other failure talking to the registry.
    #[error("{0}")]
    Upstream(String),
}

/// Registry operations used by [`crate::application::services::DomainService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::Route53Registry`] - AWS Route 53 Domains
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRegistry: Send + Sync {
    /// Returns the registry's availability status for one domain.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDomain`] when the name or TLD is rejected.
    /// Returns [`RegistryError::Upstream`] on any other failure.
    async fn check_availability(&self, domain: &str) -> Result<AvailabilityStatus, RegistryError>;

    /// Returns up to `count` domain names related to `query`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the registry call fails.
    async fn suggest_domains(
        &self,
        query: &str,
        only_available: bool,
        count: u32,
    ) -> Result<Vec<DomainSuggestion>, RegistryError>;

    /// Returns one page of TLD prices, starting at `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the registry call fails.
    async fn list_prices(
        &self,
        tld: Option<String>,
        marker: Option<String>,
    ) -> Result<PricePage, RegistryError>;
}
