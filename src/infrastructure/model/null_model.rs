//! Text model used when no model id is configured.

use crate::domain::clients::{ModelError, TextModel};
use async_trait::async_trait;
use tracing::debug;

/// A text model that refuses every call.
///
/// Keeps the domain endpoints usable when brand generation is disabled.
pub struct NullTextModel;

impl NullTextModel {
    pub fn new() -> Self {
        debug!("Using NullTextModel (brand generation disabled)");
        Self
    }
}

impl Default for NullTextModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextModel for NullTextModel {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::NotConfigured("MODEL_ID is not set".to_string()))
    }
}
