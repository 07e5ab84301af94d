//! Business logic services for the application layer.

pub mod brand_service;
pub mod domain_service;

pub use brand_service::BrandService;
pub use domain_service::DomainService;
