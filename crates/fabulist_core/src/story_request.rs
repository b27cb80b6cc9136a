//! Story request parameters.

use serde::{Deserialize, Serialize};

/// Suggested genres. Not enforced.
pub const GENRES: &[&str] = &["fantasy", "sci-fi", "mystery", "romance", "adventure", "comedy"];

/// Suggested tones. Not enforced.
pub const TONES: &[&str] = &[
    "adventurous",
    "mysterious",
    "funny",
    "heartwarming",
    "dramatic",
    "inspiring",
];

/// Suggested audiences. Not enforced.
pub const AUDIENCES: &[&str] = &["children", "young-adult", "adults", "all-ages"];

/// Suggested art styles. Not enforced.
pub const ART_STYLES: &[&str] = &[
    "cartoon",
    "realistic",
    "watercolor",
    "anime",
    "vintage",
    "minimalist",
];

/// What the caller wants a story about, and how it should read and look.
///
/// Every field is a free-form string; the constants in this module list the
/// suggested values and the first of each is the default.
///
/// # Examples
///
/// ```
/// use fabulist_core::StoryRequest;
///
/// let request = StoryRequest::builder()
///     .prompt("a fox learns to fly")
///     .art_style("watercolor")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.genre(), "fantasy");
/// assert_eq!(request.art_style(), "watercolor");
/// assert!(request.has_prompt());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    /// Free-text story idea
    #[builder(default)]
    prompt: String,
    /// Genre label
    #[builder(default = "GENRES[0].to_string()")]
    genre: String,
    /// Tone label
    #[builder(default = "TONES[0].to_string()")]
    tone: String,
    /// Intended audience label
    #[builder(default = "AUDIENCES[0].to_string()")]
    audience: String,
    /// Illustration style label
    #[builder(default = "ART_STYLES[0].to_string()")]
    art_style: String,
}

impl StoryRequest {
    /// Create a builder for `StoryRequest`.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Whether the prompt has any non-whitespace content.
    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    /// Same parameters with a different prompt.
    pub fn with_prompt(&self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self.clone()
        }
    }
}

impl Default for StoryRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            genre: GENRES[0].to_string(),
            tone: TONES[0].to_string(),
            audience: AUDIENCES[0].to_string(),
            art_style: ART_STYLES[0].to_string(),
        }
    }
}
