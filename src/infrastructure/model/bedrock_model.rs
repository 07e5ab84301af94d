//! Amazon Bedrock implementation of [`TextModel`] using the Converse API.

use crate::domain::clients::{ModelError, TextModel};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};

const TOP_P: f32 = 0.9;

/// Sampling settings applied to every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceSettings {
    pub temperature: f32,
    pub max_tokens: i32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

/// Bedrock-hosted text model addressed by model (or inference profile) id.
#[derive(Clone)]
pub struct BedrockTextModel {
    client: Client,
    model_id: String,
    settings: InferenceSettings,
}

impl BedrockTextModel {
    pub fn new(client: Client, model_id: impl Into<String>, settings: InferenceSettings) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            settings,
        }
    }

    /// Builds a client from the default AWS credential chain.
    ///
    /// When `region` is `None` the region is resolved from the environment.
    pub async fn from_env(
        model_id: impl Into<String>,
        region: Option<String>,
        settings: InferenceSettings,
    ) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;

        Self::new(Client::new(&config), model_id, settings)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl TextModel for BedrockTextModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        metrics::counter!("model_requests_total").increment(1);

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| ModelError::Request(format!("Invalid model message: {e}")))?;

        let inference = InferenceConfiguration::builder()
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .top_p(TOP_P)
            .build();

        let output = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(
                    model_id = %self.model_id,
                    error = %DisplayErrorContext(&err),
                    "Bedrock converse call failed"
                );
                ModelError::Request("Model invocation failed".to_string())
            })?;

        let text = output
            .output()
            .and_then(|o| o.as_message().ok())
            .map(|m| {
                m.content()
                    .iter()
                    .filter_map(|block| block.as_text().ok())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        tracing::debug!(
            model_id = %self.model_id,
            stop_reason = %output.stop_reason().as_str(),
            chars = text.len(),
            "Bedrock converse call completed"
        );

        Ok(text.trim().to_string())
    }
}
