//! AWS Route 53 Domains implementation of [`DomainRegistry`].
//!
//! Route 53 Domains is only served from `us-east-1`; the region is therefore
//! configured separately from the rest of the AWS environment.

use crate::domain::clients::{DomainRegistry, RegistryError};
use crate::domain::entities::{AvailabilityStatus, DomainSuggestion, PricePage, TldPrice};
use async_trait::async_trait;
use aws_sdk_route53domains::Client;
use aws_sdk_route53domains::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53domains::operation::check_domain_availability::CheckDomainAvailabilityError;
use aws_sdk_route53domains::types::{DomainPrice, PriceWithCurrency};

/// Largest page size accepted by `ListPrices`.
const PRICE_PAGE_SIZE: i32 = 1000;

/// Registry client backed by the Route 53 Domains API.
#[derive(Clone)]
pub struct Route53Registry {
    client: Client,
}

impl Route53Registry {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS credential chain.
    ///
    /// Uses the standard resolution order: environment variables, web
    /// identity token, shared credentials file, instance/task role.
    pub async fn from_region(region: impl Into<String>) -> Self {
        let config = aws_config::from_env()
            .region(aws_config::Region::new(region.into()))
            .load()
            .await;

        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl DomainRegistry for Route53Registry {
    async fn check_availability(&self, domain: &str) -> Result<AvailabilityStatus, RegistryError> {
        metrics::counter!("registry_requests_total", "operation" => "check_domain_availability")
            .increment(1);

        let output = self
            .client
            .check_domain_availability()
            .domain_name(domain)
            .send()
            .await
            .map_err(|err| {
                if let SdkError::ServiceError(service) = &err
                    && let Some(reason) = rejection_reason(service.err())
                {
                    tracing::info!(
                        domain,
                        upstream = service.err().message().unwrap_or_default(),
                        "Route 53 Domains rejected domain"
                    );
                    return RegistryError::InvalidDomain(reason.to_string());
                }
                sanitize("check_domain_availability", err)
            })?;

        let status = output
            .availability()
            .map(|a| a.as_str())
            .unwrap_or(AvailabilityStatus::UNKNOWN);

        Ok(AvailabilityStatus::new(status))
    }

    async fn suggest_domains(
        &self,
        query: &str,
        only_available: bool,
        count: u32,
    ) -> Result<Vec<DomainSuggestion>, RegistryError> {
        metrics::counter!("registry_requests_total", "operation" => "get_domain_suggestions")
            .increment(1);

        let output = self
            .client
            .get_domain_suggestions()
            .domain_name(query)
            .only_available(only_available)
            .suggestion_count(i32::try_from(count).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(|err| sanitize("get_domain_suggestions", err))?;

        let suggestions = output
            .suggestions_list()
            .iter()
            .filter_map(|s| {
                let name = s.domain_name().filter(|n| !n.is_empty())?;
                Some(DomainSuggestion {
                    domain_name: name.to_string(),
                    available: s.availability() == Some(AvailabilityStatus::AVAILABLE),
                })
            })
            .collect();

        Ok(suggestions)
    }

    async fn list_prices(
        &self,
        tld: Option<String>,
        marker: Option<String>,
    ) -> Result<PricePage, RegistryError> {
        metrics::counter!("registry_requests_total", "operation" => "list_prices").increment(1);

        let query = PriceQuery::new(tld, marker);

        let output = self
            .client
            .list_prices()
            .set_tld(query.tld)
            .set_marker(query.marker)
            .set_max_items(query.max_items)
            .send()
            .await
            .map_err(|err| sanitize("list_prices", err))?;

        Ok(PricePage {
            prices: output.prices().iter().map(to_tld_price).collect(),
            next_marker: output.next_page_marker().map(str::to_string),
        })
    }
}

/// Parameters of one `ListPrices` call.
///
/// Paging (`Marker`, `MaxItems`) is only accepted when listing every TLD; a
/// single-TLD request carries the TLD alone.
#[derive(Debug, PartialEq)]
struct PriceQuery {
    tld: Option<String>,
    marker: Option<String>,
    max_items: Option<i32>,
}

impl PriceQuery {
    fn new(tld: Option<String>, marker: Option<String>) -> Self {
        match tld {
            Some(tld) => Self {
                tld: Some(tld),
                marker: None,
                max_items: None,
            },
            None => Self {
                tld: None,
                marker,
                max_items: Some(PRICE_PAGE_SIZE),
            },
        }
    }
}

/// Fixed client-facing reason for a rejected name, `None` for other failures.
fn rejection_reason(err: &CheckDomainAvailabilityError) -> Option<&'static str> {
    if err.is_unsupported_tld() {
        Some("unsupported TLD")
    } else if err.is_invalid_input() {
        Some("invalid domain name")
    } else {
        None
    }
}

fn to_tld_price(price: &DomainPrice) -> TldPrice {
    let tiers = [
        price.registration_price(),
        price.renewal_price(),
        price.transfer_price(),
    ];

    TldPrice {
        tld: price.name().unwrap_or_default().to_string(),
        registration_price: price.registration_price().map(PriceWithCurrency::price),
        renewal_price: price.renewal_price().map(PriceWithCurrency::price),
        transfer_price: price.transfer_price().map(PriceWithCurrency::price),
        currency: tiers
            .into_iter()
            .flatten()
            .map(PriceWithCurrency::currency)
            .find(|c| !c.is_empty())
            .map(str::to_string),
    }
}

/// Logs the full SDK error and returns a message safe to show to clients.
fn sanitize<E>(operation: &'static str, err: SdkError<E>) -> RegistryError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    tracing::warn!(operation, error = %DisplayErrorContext(&err), "Route 53 Domains call failed");
    metrics::counter!("registry_failures_total", "operation" => operation).increment(1);

    let message = match &err {
        SdkError::ServiceError(_) => format!(
            "Registry rejected the request ({})",
            err.code().unwrap_or("unknown error")
        ),
        SdkError::TimeoutError(_) => "Registry request timed out".to_string(),
        _ => "Registry is unreachable".to_string(),
    };

    RegistryError::Upstream(message)
}
