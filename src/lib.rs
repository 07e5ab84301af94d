//! # Brand Boffin
//!
//! Backend for a brand-name and domain-suggestion product, built with Axum,
//! AWS Route 53 Domains and Amazon Bedrock.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Request/response entities and upstream client traits
//! - **Application Layer** ([`application`]) - Domain checks, pricing and brand generation
//! - **Infrastructure Layer** ([`infrastructure`]) - Route 53 Domains and Bedrock clients
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Single and paced batch domain availability checks
//! - Registry domain suggestions and TLD price listing
//! - Brand name generation with taglines and domain ideas
//! - Permissive CORS, rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! # AWS credentials from the default chain
//! export AWS_PROFILE="brand-boffin"
//! export MODEL_ID="anthropic.claude-3-haiku-20240307-v1:0"  # Optional
//!
//! # Start the service
//! cargo run
//!
//! # Or use the operator CLI
//! cargo run --bin boffin -- check example.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BrandService, DomainService};
    pub use crate::domain::clients::{DomainRegistry, ModelError, RegistryError, TextModel};
    pub use crate::domain::entities::{
        AvailabilityStatus, BrandNameRequest, BrandNameSuggestion, DomainCheckResult,
        DomainSuggestion, PricePage, TldPrice,
    };
    pub use crate::domain::pacing::Pacer;
    pub use crate::error::AppError;
    pub use crate::state::{ApiSettings, AppState};
    pub use crate::utils::brand_output::OutputFormat;
}
