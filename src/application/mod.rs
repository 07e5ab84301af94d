//! Application layer orchestrating upstream clients.
//!
//! Services hold their clients as shared trait objects and translate client
//! errors into [`crate::error::AppError`] exactly once.

pub mod services;
