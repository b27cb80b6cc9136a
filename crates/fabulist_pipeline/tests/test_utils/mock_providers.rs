//! Mock providers for testing.

use async_trait::async_trait;
use fabulist_core::{
    AudioClip, GenerateRequest, GenerateResponse, GeneratedImage, StoryScene, VideoOutcome,
};
use fabulist_error::{
    FabulistError, FabulistResult, ProviderError, ProviderErrorKind, StorageError,
    StorageErrorKind,
};
use fabulist_interface::{ChatDriver, ImageGenerator, SpeechSynthesizer, VideoGenerator};
use fabulist_storage::{MediaMetadata, MediaReference, MediaStorage};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(ProviderErrorKind),
}

fn provider_error(kind: &ProviderErrorKind) -> FabulistError {
    FabulistError::from(ProviderError::new("mock", kind.clone()))
}

/// Chat driver that replays a sequence of responses and records requests.
///
/// Clones share the script and the recorded requests.
#[derive(Clone)]
pub struct MockChat {
    responses: Arc<Vec<MockResponse>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockChat {
    /// Replay `responses` in order; calls past the end fail.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Succeed with each text in order.
    pub fn replies(texts: &[&str]) -> Self {
        Self::new_sequence(
            texts
                .iter()
                .map(|t| MockResponse::Success(t.to_string()))
                .collect(),
        )
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatDriver for MockChat {
    async fn generate(&self, req: &GenerateRequest) -> FabulistResult<GenerateResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        match self.responses.get(index) {
            Some(MockResponse::Success(text)) => Ok(GenerateResponse::new(text.clone())),
            Some(MockResponse::Error(kind)) => Err(provider_error(kind)),
            None => Err(provider_error(&ProviderErrorKind::Http(
                "no scripted response left".to_string(),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}

/// Image generator that always succeeds or always fails.
#[derive(Clone)]
pub struct MockImages {
    failure: Option<ProviderErrorKind>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImages {
    /// Return `https://img.example/<n>.png` for the n-th call.
    pub fn new_success() -> Self {
        Self {
            failure: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call.
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self {
            failure: Some(kind),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of images requested.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImages {
    async fn generate_image(&self, prompt: &str) -> FabulistResult<GeneratedImage> {
        let n = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };
        match &self.failure {
            Some(kind) => Err(provider_error(kind)),
            None => Ok(GeneratedImage {
                url: format!("https://img.example/{}.png", n),
                revised_prompt: None,
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Speech synthesizer that always succeeds or always fails.
#[derive(Clone)]
pub struct MockSpeech {
    failure: Option<ProviderErrorKind>,
    texts: Arc<Mutex<Vec<String>>>,
}

impl MockSpeech {
    /// Return the text's bytes as "audio".
    pub fn new_success() -> Self {
        Self {
            failure: None,
            texts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call.
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self {
            failure: Some(kind),
            texts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of clips requested.
    pub fn call_count(&self) -> usize {
        self.texts.lock().unwrap().len()
    }

    /// Texts received, in call order.
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeech {
    async fn synthesize(&self, text: &str) -> FabulistResult<AudioClip> {
        self.texts.lock().unwrap().push(text.to_string());
        match &self.failure {
            Some(kind) => Err(provider_error(kind)),
            None => Ok(AudioClip {
                mime: "audio/mpeg".to_string(),
                data: format!("ID3 {}", text).into_bytes(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Shared record of media start and finish events.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    /// Append an event.
    pub fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }

    /// Events so far, in the order they happened.
    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Image generator that will not finish until its partner reaches the same
/// barrier. Logs `image start <prompt>` and `image end <prompt>`.
#[derive(Clone)]
pub struct GatedImages {
    barrier: Arc<Barrier>,
    log: EventLog,
}

impl GatedImages {
    pub fn new(barrier: Arc<Barrier>, log: EventLog) -> Self {
        Self { barrier, log }
    }
}

#[async_trait]
impl ImageGenerator for GatedImages {
    async fn generate_image(&self, prompt: &str) -> FabulistResult<GeneratedImage> {
        self.log.push(format!("image start {}", prompt));
        self.barrier.wait().await;
        tokio::task::yield_now().await;
        self.log.push(format!("image end {}", prompt));
        Ok(GeneratedImage {
            url: format!("https://img.example/{}.png", prompt.replace(' ', "-")),
            revised_prompt: None,
        })
    }

    fn provider_name(&self) -> &'static str {
        "gated"
    }
}

/// Speech synthesizer counterpart of [`GatedImages`]. Logs
/// `audio start <text>` and `audio end <text>`.
#[derive(Clone)]
pub struct GatedSpeech {
    barrier: Arc<Barrier>,
    log: EventLog,
}

impl GatedSpeech {
    pub fn new(barrier: Arc<Barrier>, log: EventLog) -> Self {
        Self { barrier, log }
    }
}

#[async_trait]
impl SpeechSynthesizer for GatedSpeech {
    async fn synthesize(&self, text: &str) -> FabulistResult<AudioClip> {
        self.log.push(format!("audio start {}", text));
        self.barrier.wait().await;
        tokio::task::yield_now().await;
        self.log.push(format!("audio end {}", text));
        Ok(AudioClip {
            mime: "audio/mpeg".to_string(),
            data: format!("ID3 {}", text).into_bytes(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gated"
    }
}

/// Video generator that reports it cannot render.
#[derive(Clone, Default)]
pub struct MockVideo;

#[async_trait]
impl VideoGenerator for MockVideo {
    async fn generate_video(&self, _scenes: &[StoryScene]) -> FabulistResult<VideoOutcome> {
        Ok(VideoOutcome::Unsupported {
            reason: "mock".to_string(),
        })
    }
}

/// Storage backend whose writes always fail.
pub struct FailingStorage;

#[async_trait]
impl MediaStorage for FailingStorage {
    async fn store(
        &self,
        _data: &[u8],
        _metadata: &MediaMetadata,
    ) -> FabulistResult<MediaReference> {
        Err(StorageError::new(StorageErrorKind::FileWrite("disk full".to_string())).into())
    }

    async fn retrieve(&self, reference: &MediaReference) -> FabulistResult<Vec<u8>> {
        Err(StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone())).into())
    }

    async fn url(&self, _reference: &MediaReference) -> FabulistResult<Option<String>> {
        Ok(None)
    }

    async fn delete(&self, _reference: &MediaReference) -> FabulistResult<()> {
        Ok(())
    }

    async fn exists(&self, _reference: &MediaReference) -> FabulistResult<bool> {
        Ok(false)
    }
}
