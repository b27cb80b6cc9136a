//! Story scene record.

use crate::MediaOutcome;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Build a scene identifier from its ordinal and the current time.
///
/// Two calls for the same ordinal within one millisecond collide.
///
/// # Examples
///
/// ```
/// use fabulist_core::scene_id;
///
/// let id = scene_id(3);
/// assert!(id.starts_with("scene-3-"));
/// ```
pub fn scene_id(order: usize) -> String {
    format!("scene-{}-{}", order, Utc::now().timestamp_millis())
}

/// One narrative beat of a generated story.
///
/// `order` is 1-based and matches the position the scene was generated in.
/// Regeneration replaces content but keeps `id` and `order`.
///
/// Serialized records carry flat `imageUrl`/`audioUrl` strings next to the
/// tagged outcomes so consumers that only want URLs need not inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(into = "SceneRecord", from = "SceneRecord")]
pub struct StoryScene {
    /// Locally generated identifier
    id: String,
    /// 1-based position in the story
    order: usize,
    /// Narrative text
    text: String,
    /// Prompt the illustration was generated from
    image_prompt: String,
    /// Illustration result
    image: MediaOutcome,
    /// Narration result
    audio: MediaOutcome,
}

impl StoryScene {
    /// Assemble a scene with a fresh identifier.
    pub fn new(
        order: usize,
        text: impl Into<String>,
        image_prompt: impl Into<String>,
        image: MediaOutcome,
        audio: MediaOutcome,
    ) -> Self {
        Self {
            id: scene_id(order),
            order,
            text: text.into(),
            image_prompt: image_prompt.into(),
            image,
            audio,
        }
    }

    /// Same identity and position, new content.
    pub fn replace_content(
        &self,
        text: impl Into<String>,
        image_prompt: impl Into<String>,
        image: MediaOutcome,
        audio: MediaOutcome,
    ) -> Self {
        Self {
            id: self.id.clone(),
            order: self.order,
            text: text.into(),
            image_prompt: image_prompt.into(),
            image,
            audio,
        }
    }

    /// Illustration URL; a fallback URL when the image step degraded.
    pub fn image_url(&self) -> &str {
        self.image.url()
    }

    /// Narration URL; empty when no narration is available.
    pub fn audio_url(&self) -> &str {
        self.audio.url()
    }

    /// Narration to play, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabulist_core::{MediaOutcome, StoryScene};
    ///
    /// let scene = StoryScene::new(
    ///     1,
    ///     "The fox leaps.",
    ///     "cartoon fox leaping",
    ///     MediaOutcome::resolved("https://img.example/1.png"),
    ///     MediaOutcome::degraded("", "speech failed"),
    /// );
    /// assert_eq!(scene.audio_url(), "");
    /// assert!(scene.narration().is_none());
    /// ```
    pub fn narration(&self) -> Option<&str> {
        Some(self.audio.url()).filter(|url| !url.is_empty())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneRecord {
    id: String,
    order: usize,
    text: String,
    image_prompt: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    audio_url: String,
    image: MediaOutcome,
    audio: MediaOutcome,
}

impl From<StoryScene> for SceneRecord {
    fn from(scene: StoryScene) -> Self {
        Self {
            image_url: scene.image.url().to_string(),
            audio_url: scene.audio.url().to_string(),
            id: scene.id,
            order: scene.order,
            text: scene.text,
            image_prompt: scene.image_prompt,
            image: scene.image,
            audio: scene.audio,
        }
    }
}

// The flat URLs are derived from the outcomes, so they are dropped on read.
impl From<SceneRecord> for StoryScene {
    fn from(record: SceneRecord) -> Self {
        Self {
            id: record.id,
            order: record.order,
            text: record.text,
            image_prompt: record.image_prompt,
            image: record.image,
            audio: record.audio,
        }
    }
}
