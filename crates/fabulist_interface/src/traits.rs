//! Trait definitions for the generative services behind a story.

use async_trait::async_trait;
use fabulist_core::{
    AudioClip, GenerateRequest, GenerateResponse, GeneratedImage, StoryScene, VideoOutcome,
};
use fabulist_error::FabulistResult;

/// Chat-completion backend used for story text, image prompts and rewrites.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Generate a completion for the given conversation.
    async fn generate(&self, req: &GenerateRequest) -> FabulistResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model used when the request does not name one.
    fn model_name(&self) -> &str;
}

/// Text-to-image backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Produce one illustration for a prompt.
    async fn generate_image(&self, prompt: &str) -> FabulistResult<GeneratedImage>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// Text-to-speech backend.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak `text` and return the encoded audio.
    async fn synthesize(&self, text: &str) -> FabulistResult<AudioClip>;

    /// Provider name (e.g., "elevenlabs").
    fn provider_name(&self) -> &'static str;
}

/// Assembles finished scenes into a single video.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Render the scenes, or report that rendering is unsupported.
    async fn generate_video(&self, scenes: &[StoryScene]) -> FabulistResult<VideoOutcome>;
}
