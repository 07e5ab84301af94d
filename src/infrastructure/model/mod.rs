//! Text model implementations.

pub mod bedrock_model;
pub mod null_model;

pub use bedrock_model::BedrockTextModel;
pub use null_model::NullTextModel;
