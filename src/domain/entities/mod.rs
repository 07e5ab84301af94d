//! Request/response records exchanged with the registry and the text model.
//!
//! Every entity is built fresh for one request and dropped once the response
//! is serialized. None of them carries behavior beyond small constructors.
//!
//! # Entity Types
//!
//! - [`DomainCheckResult`] - Availability of one domain
//! - [`DomainSuggestion`] - A registry-suggested domain name
//! - [`TldPrice`] - Price tiers of one top-level domain
//! - [`BrandNameSuggestion`] - A generated brand name with its tagline
//! - [`BrandNameRequest`] - Criteria for brand name generation

pub mod brand;
pub mod domain_check;
pub mod suggestion;
pub mod tld_price;

pub use brand::{BrandNameRequest, BrandNameSuggestion, DEFAULT_BRAND_COUNT};
pub use domain_check::{AvailabilityStatus, DomainCheckResult};
pub use suggestion::DomainSuggestion;
pub use tld_price::{PricePage, TldPrice};
