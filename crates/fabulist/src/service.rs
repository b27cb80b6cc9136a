//! Wiring configured provider clients into a [`StoryPipeline`].

use fabulist_config::{Credentials, FabulistConfig};
use fabulist_error::FabulistResult;
use fabulist_models::{
    ElevenLabsClient, OpenAiChatClient, OpenAiImageClient, UnsupportedVideoGenerator,
    VoiceSettings, build_http_client,
};
use fabulist_pipeline::{PipelineSettings, StoryPipeline};
use fabulist_storage::FileSystemStorage;
use tracing::{info, instrument, warn};

/// Pipeline backed by the hosted providers.
pub type StoryService =
    StoryPipeline<OpenAiChatClient, OpenAiImageClient, ElevenLabsClient, UnsupportedVideoGenerator>;

/// Construct the hosted-provider pipeline from configuration.
///
/// All clients share one HTTP connection pool. Narration audio is stored
/// under [`StorageConfig::resolved_media_dir`](fabulist_config::StorageConfig::resolved_media_dir).
///
/// # Errors
///
/// Fails if the OpenAI key is missing, the HTTP client cannot be built, or
/// the media directory cannot be created. A missing ElevenLabs key only
/// silences narration.
#[instrument(skip_all, fields(chat_model = %config.chat.model, image_model = %config.image.model))]
pub fn build_story_service(
    config: &FabulistConfig,
    credentials: &Credentials,
) -> FabulistResult<StoryService> {
    let openai_key = credentials.openai()?;
    let elevenlabs_key = match credentials.elevenlabs() {
        Ok(key) => key,
        Err(e) => {
            warn!(error = %e, "Narration disabled, scenes will have no audio");
            ""
        }
    };
    let client = build_http_client(config.request_timeout())?;

    let chat = OpenAiChatClient::new(
        client.clone(),
        openai_key,
        config.chat.model.clone(),
        &config.chat.base_url,
    );
    let images = OpenAiImageClient::new(client.clone(), openai_key, &config.image.base_url)
        .with_options(
            config.image.model.clone(),
            config.image.size.clone(),
            config.image.quality.clone(),
        );
    let speech = ElevenLabsClient::new(client, elevenlabs_key, &config.speech.base_url)
        .with_voice(config.speech.voice_id.clone(), config.speech.model_id.clone())
        .with_settings(VoiceSettings {
            stability: config.speech.stability,
            similarity_boost: config.speech.similarity_boost,
        });

    let storage = FileSystemStorage::new(config.storage.resolved_media_dir())?;
    info!(media_dir = %storage.base_path().display(), "Story service ready");

    Ok(StoryPipeline::new(
        chat,
        images,
        speech,
        UnsupportedVideoGenerator,
        Box::new(storage),
        PipelineSettings::from_config(config),
    ))
}
