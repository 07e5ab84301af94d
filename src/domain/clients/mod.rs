//! Upstream client interfaces.
//!
//! Implementations are constructed once at startup and shared across requests
//! as immutable handles.

pub mod domain_registry;
pub mod text_model;

pub use domain_registry::{DomainRegistry, RegistryError};
pub use text_model::{ModelError, TextModel};

#[cfg(test)]
pub use domain_registry::MockDomainRegistry;
#[cfg(test)]
pub use text_model::MockTextModel;
