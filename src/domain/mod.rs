//! Domain layer: request/response entities and the seams to upstream APIs.
//!
//! # Architecture
//!
//! - [`entities`] - Plain records exchanged with clients and handlers
//! - [`clients`] - Traits describing the domain registry and the text model
//! - [`pacing`] - Pause abstraction used between sequential registry calls
//!
//! Concrete clients live in [`crate::infrastructure`]; orchestration lives in
//! [`crate::application::services`].

pub mod clients;
pub mod entities;
pub mod pacing;
