//! OpenAI and OpenAI-compatible endpoints.

mod chat;
mod convert;
mod dto;
mod images;

pub use chat::OpenAiChatClient;
pub use convert::{from_chat_response, image_from_response, to_chat_request};
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, ImageData, ImageGenerationRequest, ImageGenerationResponse,
};
pub use images::OpenAiImageClient;

pub(crate) const PROVIDER: &str = "openai";
