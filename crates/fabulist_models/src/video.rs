//! Video generation placeholder.

use async_trait::async_trait;
use fabulist_core::{StoryScene, VideoOutcome};
use fabulist_error::FabulistResult;
use fabulist_interface::VideoGenerator;

/// A video generator that never renders.
///
/// No provider is wired up for story videos, so every request reports
/// [`VideoOutcome::Unsupported`] without touching the network.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedVideoGenerator;

#[async_trait]
impl VideoGenerator for UnsupportedVideoGenerator {
    #[tracing::instrument(skip(self, scenes), fields(scenes = scenes.len()))]
    async fn generate_video(&self, scenes: &[StoryScene]) -> FabulistResult<VideoOutcome> {
        tracing::info!("Video generation requested but not available");
        Ok(VideoOutcome::Unsupported {
            reason: "Video generation is not available yet".to_string(),
        })
    }
}
