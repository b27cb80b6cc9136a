//! ElevenLabs HTTP client.

use super::PROVIDER;
use crate::http::{endpoint, send};
use crate::{SpeechRequest, VoiceSettings};
use async_trait::async_trait;
use fabulist_core::AudioClip;
use fabulist_error::{ConfigError, FabulistResult, ProviderError, ProviderErrorKind};
use fabulist_interface::SpeechSynthesizer;
use tracing::{debug, instrument};

const AUDIO_MPEG: &str = "audio/mpeg";

/// Client for `POST {base_url}/v1/text-to-speech/{voice_id}`.
#[derive(Clone)]
pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

impl ElevenLabsClient {
    /// Narrator voice used when none is configured.
    pub const DEFAULT_VOICE_ID: &'static str = "pNInz6obpgDQGcFmaJgB";
    /// Speech model used when none is configured.
    pub const DEFAULT_MODEL_ID: &'static str = "eleven_monolingual_v1";

    /// Create a client with the default voice, model and settings.
    ///
    /// A blank `api_key` is accepted; every synthesis then fails with a
    /// configuration error without contacting the service.
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.to_string(),
            voice_id: Self::DEFAULT_VOICE_ID.to_string(),
            model_id: Self::DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }

    /// Use a different voice and model.
    pub fn with_voice(mut self, voice_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self.model_id = model_id.into();
        self
    }

    /// Use different voice settings.
    pub fn with_settings(mut self, voice_settings: VoiceSettings) -> Self {
        self.voice_settings = voice_settings;
        self
    }

    /// Endpoint for the configured voice.
    pub fn url(&self) -> String {
        endpoint(
            &self.base_url,
            &format!("v1/text-to-speech/{}", self.voice_id),
        )
    }

    /// Request body for `text`.
    pub fn request_for(&self, text: &str) -> SpeechRequest {
        SpeechRequest {
            text: text.to_string(),
            model_id: self.model_id.clone(),
            voice_settings: self.voice_settings,
        }
    }
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url)
            .field("voice_id", &self.voice_id)
            .field("model_id", &self.model_id)
            .field("voice_settings", &self.voice_settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    #[instrument(skip(self, text), fields(provider = PROVIDER, voice_id = %self.voice_id, text_len = text.len()))]
    async fn synthesize(&self, text: &str) -> FabulistResult<AudioClip> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::new("ELEVENLABS_API_KEY not set").into());
        }

        let body = self.request_for(text);

        let response = send(
            PROVIDER,
            self.client
                .post(self.url())
                .header(reqwest::header::ACCEPT, AUDIO_MPEG)
                .header("xi-api-key", &self.api_key)
                .json(&body),
        )
        .await?;

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(AUDIO_MPEG)
            .to_string();

        let data = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read audio body: {}", e);
            ProviderError::new(PROVIDER, ProviderErrorKind::Http(e.to_string()))
        })?;

        if data.is_empty() {
            return Err(ProviderError::new(
                PROVIDER,
                ProviderErrorKind::EmptyResponse("Audio body was empty".to_string()),
            )
            .into());
        }

        debug!(bytes = data.len(), mime = %mime, "Speech synthesized");
        Ok(AudioClip {
            mime,
            data: data.to_vec(),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
