//! Provider API keys, read from the environment only.

use fabulist_error::{ConfigError, FabulistResult};

/// Environment variable holding the OpenAI key (chat and images).
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable holding the ElevenLabs key (speech).
pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";

/// API keys for the generative providers.
///
/// Debug output redacts the keys.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    openai: Option<String>,
    elevenlabs: Option<String>,
}

impl Credentials {
    /// Read keys from the process environment. Missing or blank keys are
    /// recorded as absent; callers decide whether that is fatal.
    pub fn from_env() -> Self {
        Self {
            openai: non_blank_var(OPENAI_API_KEY),
            elevenlabs: non_blank_var(ELEVENLABS_API_KEY),
        }
    }

    /// Build from explicit values.
    pub fn new(openai: Option<String>, elevenlabs: Option<String>) -> Self {
        Self { openai, elevenlabs }
    }

    /// The OpenAI key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the variable if it is not set.
    pub fn openai(&self) -> FabulistResult<&str> {
        require(self.openai.as_deref(), OPENAI_API_KEY)
    }

    /// The ElevenLabs key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the variable if it is not set.
    pub fn elevenlabs(&self) -> FabulistResult<&str> {
        require(self.elevenlabs.as_deref(), ELEVENLABS_API_KEY)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai", &self.openai.as_ref().map(|_| "<redacted>"))
            .field("elevenlabs", &self.elevenlabs.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn require<'a>(value: Option<&'a str>, name: &str) -> FabulistResult<&'a str> {
    value.ok_or_else(|| ConfigError::new(format!("{} not set", name)).into())
}
