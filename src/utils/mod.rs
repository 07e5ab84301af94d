//! Pure helpers used by services and handlers.
//!
//! - [`domain_name`] - Domain input sanitization
//! - [`brand_prompt`] - Prompt assembly for brand generation
//! - [`brand_output`] - Parsing of model output into suggestions
//! - [`brand_domain`] - Deriving a `.com` domain from a brand name

pub mod brand_domain;
pub mod brand_output;
pub mod brand_prompt;
pub mod domain_name;
