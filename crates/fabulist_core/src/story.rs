//! Story aggregate.

use crate::{StoryRequest, StoryScene};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TITLE_MAX_CHARS: usize = 60;

/// A generated story: the request that produced it plus its ordered scenes.
///
/// The pipeline only returns scenes; callers wrap them in a `Story` when
/// they want to keep the originating parameters next to the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Story identifier
    id: Uuid,
    /// Short title derived from the prompt
    title: String,
    /// Full text, scenes separated by blank lines
    content: String,
    /// Parameters the story was generated with
    request: StoryRequest,
    /// Scenes in story order
    scenes: Vec<StoryScene>,
    /// When the story was assembled
    created_at: DateTime<Utc>,
}

impl Story {
    /// Wrap generated scenes together with their request.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabulist_core::{MediaOutcome, Story, StoryRequest, StoryScene};
    ///
    /// let request = StoryRequest::default().with_prompt("A fox learns to fly");
    /// let scenes = vec![
    ///     StoryScene::new(1, "Scene A", "p1", MediaOutcome::resolved("u1"), MediaOutcome::resolved("a1")),
    ///     StoryScene::new(2, "Scene B", "p2", MediaOutcome::resolved("u2"), MediaOutcome::resolved("a2")),
    /// ];
    ///
    /// let story = Story::from_scenes(request, scenes);
    /// assert_eq!(story.title(), "A fox learns to fly");
    /// assert_eq!(story.content(), "Scene A\n\nScene B");
    /// assert_eq!(story.transcript(), "Scene 1:\nScene A\n\nScene 2:\nScene B\n\n");
    /// ```
    pub fn from_scenes(request: StoryRequest, scenes: Vec<StoryScene>) -> Self {
        let title = title_from_prompt(request.prompt());
        let content = join_content(&scenes);
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            request,
            scenes,
            created_at: Utc::now(),
        }
    }

    /// Swap in a regenerated scene at the position of the scene with the
    /// same identifier. Returns the replaced scene, or `None` if no scene
    /// carries that identifier.
    pub fn replace_scene(&mut self, scene: StoryScene) -> Option<StoryScene> {
        let index = self.scenes.iter().position(|s| s.id() == scene.id())?;
        let previous = std::mem::replace(&mut self.scenes[index], scene);
        self.content = join_content(&self.scenes);
        Some(previous)
    }

    /// Find a scene by identifier.
    pub fn scene(&self, id: &str) -> Option<&StoryScene> {
        self.scenes.iter().find(|s| s.id() == id)
    }

    /// Plain-text export, one `Scene N:` block per scene.
    pub fn transcript(&self) -> String {
        self.scenes
            .iter()
            .enumerate()
            .map(|(index, scene)| format!("Scene {}:\n{}\n\n", index + 1, scene.text()))
            .collect()
    }

    /// Illustration URLs that have something to show, in story order.
    pub fn image_urls(&self) -> Vec<&str> {
        self.scenes
            .iter()
            .map(|scene| scene.image_url())
            .filter(|url| !url.is_empty())
            .collect()
    }
}

fn join_content(scenes: &[StoryScene]) -> String {
    scenes
        .iter()
        .map(|scene| scene.text().as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn title_from_prompt(prompt: &str) -> String {
    let first_line = prompt.trim().lines().next().unwrap_or_default().trim();
    if first_line.chars().count() <= TITLE_MAX_CHARS {
        return first_line.to_string();
    }
    let truncated: String = first_line.chars().take(TITLE_MAX_CHARS).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaOutcome;

    fn scene(order: usize, text: &str) -> StoryScene {
        StoryScene::new(
            order,
            text,
            format!("prompt {}", order),
            MediaOutcome::resolved(format!("https://img.example/{}.png", order)),
            MediaOutcome::degraded("", "no narration"),
        )
    }

    #[test]
    fn test_title_truncates_long_prompt() {
        let prompt = "a".repeat(100);
        let title = title_from_prompt(&prompt);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_title_uses_first_line() {
        assert_eq!(title_from_prompt("  Moon fox\nmore detail"), "Moon fox");
    }

    #[test]
    fn test_replace_scene_keeps_position() {
        let mut story = Story::from_scenes(
            StoryRequest::default().with_prompt("fox"),
            vec![scene(1, "one"), scene(2, "two"), scene(3, "three")],
        );
        let original = story.scenes()[1].clone();
        let replacement = original.replace_content(
            "two again",
            "new prompt",
            MediaOutcome::resolved("https://img.example/new.png"),
            MediaOutcome::resolved("file:///tmp/new.mp3"),
        );

        let previous = story.replace_scene(replacement).unwrap();

        assert_eq!(previous, original);
        assert_eq!(story.scenes()[1].text(), "two again");
        assert_eq!(story.scenes()[1].id(), original.id());
        assert_eq!(*story.scenes()[1].order(), 2);
        assert_eq!(story.content(), "one\n\ntwo again\n\nthree");
    }

    #[test]
    fn test_replace_unknown_scene_is_none() {
        let mut story = Story::from_scenes(StoryRequest::default(), vec![scene(1, "one")]);
        let mut stranger = scene(1, "other");
        // Force a distinct identifier.
        stranger = serde_json::from_value(serde_json::json!({
            "id": "scene-9-0",
            "order": 1,
            "text": stranger.text(),
            "imagePrompt": stranger.image_prompt(),
            "image": {"status": "resolved", "url": "u"},
            "audio": {"status": "resolved", "url": "a"}
        }))
        .unwrap();
        assert!(story.replace_scene(stranger).is_none());
    }

    #[test]
    fn test_image_urls_skip_empty() {
        let mut second = scene(2, "two");
        second = second.replace_content(
            "two",
            "p",
            MediaOutcome::degraded("", "no image"),
            MediaOutcome::degraded("", "no audio"),
        );
        let story = Story::from_scenes(StoryRequest::default(), vec![scene(1, "one"), second]);
        assert_eq!(story.image_urls(), vec!["https://img.example/1.png"]);
    }
}
