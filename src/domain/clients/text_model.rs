//! Generative text model interface.

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The model is not configured or its credentials are unavailable.
    #[error("{0}")]
    NotConfigured(String),

    /// The request could not be built or the model call failed.
    #[error("{0}")]
    Request(String),
}

/// A text model that answers a single-turn prompt.
///
/// # Implementations
///
/// - [`crate::infrastructure::model::BedrockTextModel`] - Amazon Bedrock Converse API
/// - [`crate::infrastructure::model::NullTextModel`] - Used when no model is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Sends `system` and `prompt` to the model and returns its text output, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on configuration, transport or auth failures.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError>;
}
