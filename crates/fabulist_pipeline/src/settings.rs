//! Pipeline settings.

use crate::DEFAULT_FALLBACK_HOST;
use fabulist_config::FabulistConfig;
use fabulist_core::SegmentProtocol;

/// Knobs the pipeline reads on every call.
///
/// # Examples
///
/// ```
/// use fabulist_core::SegmentProtocol;
/// use fabulist_pipeline::PipelineSettings;
///
/// let settings = PipelineSettings::builder()
///     .protocol(SegmentProtocol::Indexed)
///     .scene_count(3usize)
///     .build()
///     .unwrap();
/// assert_eq!(settings.rewrite_model(), "gpt-4");
/// assert_eq!(*settings.scene_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct PipelineSettings {
    /// Model used for single-scene rewrites
    #[builder(default = "\"gpt-4\".to_string()")]
    rewrite_model: String,
    /// Delimiting convention for multi-scene responses
    #[builder(default)]
    protocol: SegmentProtocol,
    /// Scenes requested under the indexed protocol
    #[builder(default = "5")]
    scene_count: usize,
    /// Host for stand-in illustration URLs
    #[builder(default = "DEFAULT_FALLBACK_HOST.to_string()")]
    fallback_host: String,
}

impl PipelineSettings {
    /// Create a builder for `PipelineSettings`.
    pub fn builder() -> PipelineSettingsBuilder {
        PipelineSettingsBuilder::default()
    }

    /// Settings taken from loaded configuration.
    pub fn from_config(config: &FabulistConfig) -> Self {
        Self {
            rewrite_model: config.chat.rewrite_model.clone(),
            protocol: config.pipeline.protocol,
            scene_count: config.pipeline.scene_count,
            fallback_host: config.image.fallback_host.clone(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&FabulistConfig::default())
    }
}
