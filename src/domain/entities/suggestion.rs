//! Domain name suggestion returned by the registry.

use serde::Serialize;

/// A domain name proposed by the registry for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSuggestion {
    pub domain_name: String,
    pub available: bool,
}
