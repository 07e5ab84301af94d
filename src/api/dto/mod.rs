//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs keep every field optional so handlers can reject missing
//! input with a route-specific message instead of a generic shape error.

pub mod batch_check;
pub mod brands;
pub mod domain_check;
pub mod health;
pub mod suggestions;
pub mod tld_prices;
