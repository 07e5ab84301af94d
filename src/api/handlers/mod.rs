//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one route.

pub mod batch_check;
pub mod brands;
pub mod domain_check;
pub mod fallback;
pub mod health;
pub mod suggestions;
pub mod tld_prices;

pub use batch_check::batch_check_handler;
pub use brands::brand_suggestions_handler;
pub use domain_check::check_domain_handler;
pub use fallback::{method_not_allowed, not_found};
pub use health::health_handler;
pub use suggestions::domain_suggestions_handler;
pub use tld_prices::tld_prices_handler;
