//! Generative provider clients for Fabulist.
//!
//! Each client implements one of the `fabulist_interface` traits over HTTP:
//!
//! - [`OpenAiChatClient`]: OpenAI-compatible chat completions
//! - [`OpenAiImageClient`]: OpenAI image generations
//! - [`ElevenLabsClient`]: ElevenLabs text-to-speech
//! - [`UnsupportedVideoGenerator`]: reports that video is unavailable
//!
//! Clients never retry. Non-success responses are classified with
//! [`ProviderErrorKind::from_status`](fabulist_error::ProviderErrorKind::from_status)
//! and returned to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod elevenlabs;
mod http;
mod openai;
mod video;

pub use elevenlabs::{ElevenLabsClient, SpeechRequest, VoiceSettings};
pub use http::build_http_client;
pub use openai::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, ImageData, ImageGenerationRequest, ImageGenerationResponse,
    OpenAiChatClient, OpenAiImageClient, from_chat_response, image_from_response,
    to_chat_request,
};
pub use video::UnsupportedVideoGenerator;
