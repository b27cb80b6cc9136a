//! User-facing failure messages.

use fabulist_error::{FabulistError, FabulistErrorKind, StoryErrorKind};

/// Short message shown to the user; the full error belongs in the logs.
///
/// # Examples
///
/// ```
/// use fabulist::{StoryError, StoryErrorKind, user_message};
///
/// let err = StoryError::new(StoryErrorKind::TextGeneration).into();
/// assert_eq!(user_message(&err), "Failed to generate story. Please try again.");
/// ```
pub fn user_message(err: &FabulistError) -> &'static str {
    match err.kind() {
        FabulistErrorKind::Story(story) => match &story.kind {
            StoryErrorKind::EmptyPrompt => "Please enter a story idea.",
            StoryErrorKind::TextGeneration | StoryErrorKind::PromptExpansion => {
                "Failed to generate story. Please try again."
            }
            StoryErrorKind::SceneRewrite => "Failed to regenerate scene. Please try again.",
            StoryErrorKind::SceneNotFound(_) => "That scene is not part of the story.",
        },
        FabulistErrorKind::Config(_) => {
            "Fabulist is not configured correctly. Check your settings and API keys."
        }
        FabulistErrorKind::Json(_) | FabulistErrorKind::Storage(_) => {
            "Could not read or write the story file."
        }
        FabulistErrorKind::Http(_) | FabulistErrorKind::Provider(_) => {
            "A story service is unavailable. Please try again."
        }
    }
}
