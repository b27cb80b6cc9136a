//! Chat requests sent by the pipeline.
//!
//! The separator-protocol instructions are sent byte for byte as written
//! here, including the trailing space and indentation on each line.

use crate::number_segments;
use fabulist_core::{GenerateRequest, Message, SegmentProtocol, StoryRequest};
use fabulist_error::{FabulistResult, ProviderError, ProviderErrorKind};

/// Token budget for the story text call.
pub const STORY_MAX_TOKENS: u32 = 1000;
/// Sampling temperature for the story text call.
pub const STORY_TEMPERATURE: f32 = 0.8;
/// Token budget for the image prompt call.
pub const IMAGE_PROMPT_MAX_TOKENS: u32 = 800;
/// Sampling temperature for the image prompt call.
pub const IMAGE_PROMPT_TEMPERATURE: f32 = 0.7;
/// Token budget for a scene rewrite.
pub const REWRITE_MAX_TOKENS: u32 = 200;
/// Sampling temperature for a scene rewrite.
pub const REWRITE_TEMPERATURE: f32 = 0.9;

/// System instruction for the story text call.
pub fn story_system_prompt(
    request: &StoryRequest,
    protocol: SegmentProtocol,
    scene_count: usize,
) -> String {
    match protocol {
        SegmentProtocol::Separator => format!(
            "You are a creative storyteller. Create a {}-appropriate {} story with a {} tone. \n      Break the story into exactly 5 scenes. Each scene should be 2-3 sentences long and suitable for illustration.\n      Return only the scenes separated by \"|||\" with no additional formatting or numbering.",
            request.audience(),
            request.genre(),
            request.tone()
        ),
        SegmentProtocol::Indexed => format!(
            "You are a creative storyteller. Create a {}-appropriate {} story with a {} tone. \n      Break the story into exactly {} scenes. Each scene should be 2-3 sentences long and suitable for illustration.\n      Start each scene with its number in square brackets, like [1], [2], and add no other formatting.",
            request.audience(),
            request.genre(),
            request.tone(),
            scene_count
        ),
    }
}

/// System instruction for the image prompt call.
pub fn image_prompt_system_prompt(art_style: &str, protocol: SegmentProtocol) -> String {
    match protocol {
        SegmentProtocol::Separator => format!(
            "Convert each story scene into a detailed image generation prompt for {} style art. \n      Make prompts vivid, specific, and suitable for AI image generation. Include lighting, composition, and mood details.\n      Return prompts separated by \"|||\".",
            art_style
        ),
        SegmentProtocol::Indexed => format!(
            "Convert each story scene into a detailed image generation prompt for {} style art. \n      Make prompts vivid, specific, and suitable for AI image generation. Include lighting, composition, and mood details.\n      Start each prompt with the number of its scene in square brackets, like [1], [2].",
            art_style
        ),
    }
}

/// System instruction for a single-scene rewrite.
pub fn rewrite_system_prompt(request: &StoryRequest) -> String {
    format!(
        "Rewrite this story scene with a {} tone for {} audience. \n      Keep it 2-3 sentences and maintain the story flow. Make it different but thematically consistent.",
        request.tone(),
        request.audience()
    )
}

/// Request for the story text step.
pub fn story_text_request(
    request: &StoryRequest,
    protocol: SegmentProtocol,
    scene_count: usize,
) -> FabulistResult<GenerateRequest> {
    build(
        vec![
            Message::system(story_system_prompt(request, protocol, scene_count)),
            Message::user(format!("Story idea: {}", request.prompt())),
        ],
        STORY_MAX_TOKENS,
        STORY_TEMPERATURE,
        None,
    )
}

/// Request for the image prompt step.
///
/// Scenes are joined by a blank line; under the indexed protocol each is
/// numbered so the answer can be matched back.
pub fn image_prompt_request(
    scenes: &[String],
    art_style: &str,
    protocol: SegmentProtocol,
) -> FabulistResult<GenerateRequest> {
    let body = match protocol {
        SegmentProtocol::Separator => scenes.join("\n\n"),
        SegmentProtocol::Indexed => number_segments(scenes),
    };
    build(
        vec![
            Message::system(image_prompt_system_prompt(art_style, protocol)),
            Message::user(body),
        ],
        IMAGE_PROMPT_MAX_TOKENS,
        IMAGE_PROMPT_TEMPERATURE,
        None,
    )
}

/// Request for rewriting one scene with `model`.
pub fn rewrite_request(
    scene_text: &str,
    request: &StoryRequest,
    model: &str,
) -> FabulistResult<GenerateRequest> {
    build(
        vec![
            Message::system(rewrite_system_prompt(request)),
            Message::user(scene_text),
        ],
        REWRITE_MAX_TOKENS,
        REWRITE_TEMPERATURE,
        Some(model.to_string()),
    )
}

fn build(
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
    model: Option<String>,
) -> FabulistResult<GenerateRequest> {
    GenerateRequest::builder()
        .messages(messages)
        .max_tokens(Some(max_tokens))
        .temperature(Some(temperature))
        .model(model)
        .build()
        .map_err(|e| ProviderError::new("pipeline", ProviderErrorKind::Builder(e.to_string())).into())
}
