//! Request and response types for chat generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-neutral chat generation request.
///
/// `model` is optional; drivers fall back to their configured model.
///
/// # Examples
///
/// ```
/// use fabulist_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Be brief."), Message::user("Hello!")])
///     .max_tokens(Some(100))
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), Some(100));
/// assert_eq!(*request.model(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier override
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Create a builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Text produced by a chat generation call.
///
/// # Examples
///
/// ```
/// use fabulist_core::GenerateResponse;
///
/// let response = GenerateResponse::new("Scene A|||Scene B");
/// assert_eq!(response.text(), "Scene A|||Scene B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Generated text; empty when the model returned no content
    text: String,
}

impl GenerateResponse {
    /// Wrap generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
