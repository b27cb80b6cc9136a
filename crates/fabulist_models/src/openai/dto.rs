//! Wire types for the OpenAI chat and image endpoints.

use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    temperature: Option<f32>,
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// Chat completion response body. Only the fields Fabulist reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatCompletionResponse {
    /// Model that produced the completion
    #[serde(default)]
    model: Option<String>,
    /// Generated completions
    #[serde(default)]
    choices: Vec<Choice>,
}

/// A completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Choice {
    /// The generated message
    message: ChoiceMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Message inside a choice. `content` is null for refusals and tool calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChoiceMessage {
    /// Role, normally "assistant"
    #[serde(default)]
    role: Option<String>,
    /// Generated text
    #[serde(default)]
    content: Option<String>,
}

/// Image generation request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Image model
    pub model: String,
    /// What to draw
    pub prompt: String,
    /// Output size, e.g. "1024x1024"
    pub size: String,
    /// Output quality, e.g. "standard"
    pub quality: String,
    /// Number of images
    pub n: u32,
}

/// Image generation response body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    /// Generated images
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageData {
    /// Hosted image URL
    #[serde(default)]
    pub url: Option<String>,
    /// Prompt after provider-side rewriting
    #[serde(default)]
    pub revised_prompt: Option<String>,
}
