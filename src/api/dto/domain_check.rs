//! DTOs for the single domain check endpoint.

use crate::domain::entities::DomainCheckResult;
use serde::{Deserialize, Serialize};

/// Domain to check. Accepts either `domain` or `domainName`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDomainRequest {
    pub domain: Option<String>,
    pub domain_name: Option<String>,
}

impl CheckDomainRequest {
    /// The domain as sent, preferring a non-blank `domain` over `domainName`.
    pub fn raw_domain(&self) -> Option<&str> {
        self.domain
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(self.domain_name.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct CheckDomainResponse {
    pub result: DomainCheckResult,
}
