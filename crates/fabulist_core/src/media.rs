//! Media results produced for a scene.

use serde::{Deserialize, Serialize};

/// Result of a non-critical media step.
///
/// Media steps never fail a story. When the provider call fails the step
/// degrades to a fallback value and records why, so callers can tell a real
/// illustration from a stand-in without inspecting the URL.
///
/// # Examples
///
/// ```
/// use fabulist_core::MediaOutcome;
///
/// let ok = MediaOutcome::resolved("https://cdn.example/scene-1.png");
/// assert_eq!(ok.url(), "https://cdn.example/scene-1.png");
/// assert!(!ok.is_degraded());
///
/// let silent = MediaOutcome::degraded("", "speech provider unavailable");
/// assert_eq!(silent.url(), "");
/// assert!(silent.is_degraded());
/// assert!(!silent.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MediaOutcome {
    /// The provider produced the media
    Resolved {
        /// Location of the media
        url: String,
    },
    /// The provider failed and a fallback value stands in
    Degraded {
        /// Substitute value; empty when no substitute exists
        fallback: String,
        /// Why the provider call failed
        reason: String,
    },
}

impl MediaOutcome {
    /// Media the provider actually produced.
    pub fn resolved(url: impl Into<String>) -> Self {
        Self::Resolved { url: url.into() }
    }

    /// Stand-in value after a provider failure.
    pub fn degraded(fallback: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Degraded {
            fallback: fallback.into(),
            reason: reason.into(),
        }
    }

    /// The URL to present, resolved or fallback.
    pub fn url(&self) -> &str {
        match self {
            Self::Resolved { url } => url,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    /// Whether this outcome is a fallback.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Whether there is anything to present at all.
    pub fn is_available(&self) -> bool {
        !self.url().is_empty()
    }
}

/// An illustration returned by an image provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Where the provider hosts the image
    pub url: String,
    /// Prompt as rewritten by the provider, when it reports one
    pub revised_prompt: Option<String>,
}

/// Narration audio returned by a speech provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioClip {
    /// MIME type of `data`
    pub mime: String,
    /// Encoded audio bytes
    pub data: Vec<u8>,
}

/// Result of asking for an assembled story video.
///
/// # Examples
///
/// ```
/// use fabulist_core::VideoOutcome;
///
/// let outcome = VideoOutcome::Unsupported {
///     reason: "video synthesis is not available".to_string(),
/// };
/// assert!(outcome.url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VideoOutcome {
    /// A video was produced
    Rendered {
        /// Location of the video
        url: String,
    },
    /// The configured generator cannot produce video
    Unsupported {
        /// Explanation suitable for display
        reason: String,
    },
}

impl VideoOutcome {
    /// The video URL, if one was produced.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Rendered { url } => Some(url),
            Self::Unsupported { .. } => None,
        }
    }
}
