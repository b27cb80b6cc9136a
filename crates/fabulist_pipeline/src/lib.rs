//! Story generation pipeline for Fabulist.
//!
//! [`StoryPipeline`] turns a [`StoryRequest`](fabulist_core::StoryRequest)
//! into ordered [`StoryScene`](fabulist_core::StoryScene)s by driving a chat
//! model, an image generator and a speech synthesizer, and can rewrite a
//! single scene in place.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod pipeline;
mod prompts;
mod protocol;
mod settings;

pub use fallback::{
    DEFAULT_FALLBACK_HOST, fallback_image_url, fallback_image_url_with, fallback_prompt,
};
pub use pipeline::StoryPipeline;
pub use prompts::{
    IMAGE_PROMPT_MAX_TOKENS, IMAGE_PROMPT_TEMPERATURE, REWRITE_MAX_TOKENS, REWRITE_TEMPERATURE,
    STORY_MAX_TOKENS, STORY_TEMPERATURE, image_prompt_request, image_prompt_system_prompt,
    rewrite_request, rewrite_system_prompt, story_system_prompt, story_text_request,
};
pub use protocol::{
    SEPARATOR, number_segments, parse_indexed, read_segments, read_slots, split_segments,
};
pub use settings::{PipelineSettings, PipelineSettingsBuilder, PipelineSettingsBuilderError};
