//! Infrastructure layer for external integrations.
//!
//! This layer implements the client traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`registry`] - AWS Route 53 Domains registry client
//! - [`model`] - Amazon Bedrock text model and the no-op fallback

pub mod model;
pub mod registry;
