//! Configuration file model and loader.

use config::{Config, Environment, File, FileFormat};
use fabulist_core::SegmentProtocol;
use fabulist_error::{ConfigError, FabulistError, FabulistResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../fabulist.toml");
const ENV_PREFIX: &str = "FABULIST";

/// Chat-completion endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// OpenAI-compatible API root (without `/chat/completions`)
    pub base_url: String,
    /// Model for story text and image prompts
    pub model: String,
    /// Model for single-scene rewrites
    pub rewrite_model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-oss-20b".to_string(),
            rewrite_model: "gpt-4".to_string(),
        }
    }
}

/// Image-generation endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// OpenAI-compatible API root (without `/images/generations`)
    pub base_url: String,
    /// Image model
    pub model: String,
    /// Output size, e.g. "1024x1024"
    pub size: String,
    /// Output quality, e.g. "standard"
    pub quality: String,
    /// Host used to build stand-in image URLs when generation fails
    pub fallback_host: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            fallback_host: "images.pexels.com".to_string(),
        }
    }
}

/// Text-to-speech endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// ElevenLabs API root
    pub base_url: String,
    /// Narrator voice
    pub voice_id: String,
    /// Speech model
    pub model_id: String,
    /// Voice stability, 0.0 to 1.0
    pub stability: f32,
    /// Voice similarity boost, 0.0 to 1.0
    pub similarity_boost: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            voice_id: "pNInz6obpgDQGcFmaJgB".to_string(),
            model_id: "eleven_monolingual_v1".to_string(),
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

/// Where narration audio is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit media directory
    pub media_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured directory, or `<data dir>/fabulist/media`, or
    /// `./fabulist-media` when the platform has no data directory.
    pub fn resolved_media_dir(&self) -> PathBuf {
        if let Some(dir) = &self.media_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("fabulist").join("media"))
            .unwrap_or_else(|| PathBuf::from("fabulist-media"))
    }
}

/// Story pipeline knobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How multi-scene responses are delimited
    pub protocol: SegmentProtocol,
    /// Scenes requested under the indexed protocol
    pub scene_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            protocol: SegmentProtocol::Separator,
            scene_count: 5,
        }
    }
}

/// Top-level Fabulist configuration.
///
/// # Example
///
/// ```no_run
/// use fabulist_config::FabulistConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FabulistConfig::load()?;
/// println!("Story model: {}", config.chat.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FabulistConfig {
    /// Chat-completion settings
    pub chat: ChatConfig,
    /// Image-generation settings
    pub image: ImageConfig,
    /// Text-to-speech settings
    pub speech: SpeechConfig,
    /// Media storage settings
    pub storage: StorageConfig,
    /// Pipeline settings
    pub pipeline: PipelineConfig,
    /// HTTP timeout applied to every provider call; client default when unset
    pub request_timeout_secs: Option<u64>,
}

impl FabulistConfig {
    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FabulistResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder.build().map_err(|e| {
            FabulistError::from(ConfigError::new(format!(
                "Failed to read configuration from {}: {}",
                path.as_ref().display(),
                e
            )))
        })?)
    }

    /// Load configuration from every source in precedence order.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> FabulistResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabulist/fabulist.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("fabulist").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::finish(builder.build().map_err(|e| {
            FabulistError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?)
    }

    fn finish(config: Config) -> FabulistResult<Self> {
        config.try_deserialize().map_err(|e| {
            FabulistError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
    }

    /// Per-request HTTP timeout, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
