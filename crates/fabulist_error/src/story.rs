//! Story pipeline error types.
//!
//! Text-bearing steps collapse every underlying failure into one of these
//! generic kinds; the cause is logged where it happens, not carried along.

/// Specific error conditions for story generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// The request prompt is empty or whitespace
    #[display("Story prompt cannot be empty")]
    EmptyPrompt,
    /// The story text step failed
    #[display("Failed to generate story text")]
    TextGeneration,
    /// The image prompt step failed
    #[display("Failed to generate image prompts")]
    PromptExpansion,
    /// Rewriting a single scene failed
    #[display("Failed to regenerate scene")]
    SceneRewrite,
    /// Scene identifier not present in the story
    #[display("Scene '{}' not found in story", _0)]
    SceneNotFound(String),
}

/// Error type for story operations.
///
/// # Examples
///
/// ```
/// use fabulist_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::TextGeneration);
/// assert!(format!("{}", err).contains("Failed to generate story text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
