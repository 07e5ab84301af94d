//! Availability check result for a single domain.

use serde::Serialize;
use std::fmt;

/// Availability status string as reported by the registry.
///
/// The registry reports values such as `AVAILABLE`, `UNAVAILABLE`, `PENDING`,
/// `RESERVED` or `DONT_KNOW`. Only `AVAILABLE` means the domain can be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityStatus(String);

impl AvailabilityStatus {
    pub const AVAILABLE: &'static str = "AVAILABLE";
    pub const PENDING: &'static str = "PENDING";
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the exact `AVAILABLE` status.
    pub fn is_available(&self) -> bool {
        self.0 == Self::AVAILABLE
    }

    pub fn is_pending(&self) -> bool {
        self.0 == Self::PENDING
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of checking one domain.
///
/// Invariant: `error` set implies `available == false`. Both constructors
/// uphold it and the fields are only read outside this module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainCheckResult {
    pub domain: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DomainCheckResult {
    pub fn from_status(domain: impl Into<String>, status: &AvailabilityStatus) -> Self {
        Self {
            domain: domain.into(),
            available: status.is_available(),
            error: None,
        }
    }

    pub fn failed(domain: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            available: false,
            error: Some(error.into()),
        }
    }
}
