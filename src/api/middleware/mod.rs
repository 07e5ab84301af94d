//! HTTP middleware for request processing and protection.
//!
//! Provides CORS handling, rate limiting, request deadlines, and observability
//! middleware.

pub mod cors;
pub mod rate_limit;
pub mod timeout;
pub mod tracing;
