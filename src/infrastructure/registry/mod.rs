//! Domain registry implementations.

pub mod route53_registry;

pub use route53_registry::Route53Registry;
