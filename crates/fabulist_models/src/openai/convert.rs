//! Conversion between Fabulist and OpenAI wire types.

use super::PROVIDER;
use crate::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    ImageGenerationResponse,
};
use fabulist_core::{GenerateRequest, GenerateResponse, GeneratedImage};
use fabulist_error::{FabulistResult, ProviderError, ProviderErrorKind};

/// Convert a generate request into a chat completion body.
///
/// The request's own model wins over `default_model`.
pub fn to_chat_request(
    request: &GenerateRequest,
    default_model: &str,
) -> FabulistResult<ChatCompletionRequest> {
    let model = request
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let messages = request
        .messages()
        .iter()
        .map(|m| ChatMessage {
            role: m.role().to_string(),
            content: m.content().clone(),
        })
        .collect::<Vec<_>>();

    ChatCompletionRequestBuilder::default()
        .model(model)
        .messages(messages)
        .max_tokens(*request.max_tokens())
        .temperature(*request.temperature())
        .build()
        .map_err(|e| ProviderError::new(PROVIDER, ProviderErrorKind::Builder(e.to_string())).into())
}

/// Extract the first choice's text.
///
/// A choice with null content yields empty text; a response with no choices
/// is an error.
pub fn from_chat_response(response: ChatCompletionResponse) -> FabulistResult<GenerateResponse> {
    let choice = response.choices().first().ok_or_else(|| {
        ProviderError::new(
            PROVIDER,
            ProviderErrorKind::EmptyResponse("No choices in response".to_string()),
        )
    })?;

    let text = choice.message().content().clone().unwrap_or_default();
    Ok(GenerateResponse::new(text))
}

/// Extract the first image's URL.
pub fn image_from_response(response: ImageGenerationResponse) -> FabulistResult<GeneratedImage> {
    let image = response.data.into_iter().next().ok_or_else(|| {
        ProviderError::new(
            PROVIDER,
            ProviderErrorKind::EmptyResponse("No images in response".to_string()),
        )
    })?;

    match image.url.filter(|url| !url.is_empty()) {
        Some(url) => Ok(GeneratedImage {
            url,
            revised_prompt: image.revised_prompt,
        }),
        None => Err(ProviderError::new(
            PROVIDER,
            ProviderErrorKind::EmptyResponse("Image has no URL".to_string()),
        )
        .into()),
    }
}
