//! Story generation pipeline.
//!
//! A story is produced in four steps:
//!
//! 1. Story text: one chat call returns the scene texts.
//! 2. Image prompts: one chat call turns every scene into an image prompt.
//! 3. Media: for each scene, an illustration and a narration clip are
//!    requested concurrently. Failures degrade to stand-ins.
//! 4. Assembly: text, prompt and media become a [`StoryScene`].
//!
//! Scenes are processed one after another in story order. Steps 1 and 2
//! are the only ones that can fail a story; nothing is retried.

use crate::{
    PipelineSettings, fallback_image_url, fallback_prompt, image_prompt_request, read_segments,
    read_slots, rewrite_request, story_text_request,
};
use fabulist_core::{MediaOutcome, StoryRequest, StoryScene, VideoOutcome};
use fabulist_error::{
    FabulistResult, StorageError, StorageErrorKind, StoryError, StoryErrorKind,
};
use fabulist_interface::{ChatDriver, ImageGenerator, SpeechSynthesizer, VideoGenerator};
use fabulist_storage::{MediaMetadata, MediaStorage};
use tracing::{debug, error, info, instrument, warn};

/// Orchestrates the providers that turn a story idea into scenes.
///
/// The pipeline owns its clients; it keeps no state between calls.
pub struct StoryPipeline<C, I, S, V>
where
    C: ChatDriver,
    I: ImageGenerator,
    S: SpeechSynthesizer,
    V: VideoGenerator,
{
    chat: C,
    images: I,
    speech: S,
    video: V,
    storage: Box<dyn MediaStorage>,
    settings: PipelineSettings,
}

impl<C, I, S, V> StoryPipeline<C, I, S, V>
where
    C: ChatDriver,
    I: ImageGenerator,
    S: SpeechSynthesizer,
    V: VideoGenerator,
{
    /// Assemble a pipeline from its providers.
    ///
    /// Narration audio is written to `storage` and scenes link to it by URL.
    pub fn new(
        chat: C,
        images: I,
        speech: S,
        video: V,
        storage: Box<dyn MediaStorage>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            chat,
            images,
            speech,
            video,
            storage,
            settings,
        }
    }

    /// Settings in effect.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Ask the chat model for the scene texts of a new story.
    ///
    /// # Errors
    ///
    /// [`StoryErrorKind::EmptyPrompt`] for a blank prompt (no call is made);
    /// [`StoryErrorKind::TextGeneration`] if the call fails or yields no
    /// scenes.
    #[instrument(skip(self, request), fields(genre = %request.genre(), tone = %request.tone(), audience = %request.audience()))]
    pub async fn generate_story_text(&self, request: &StoryRequest) -> FabulistResult<Vec<String>> {
        if !request.has_prompt() {
            warn!("Rejected story request with empty prompt");
            return Err(StoryError::new(StoryErrorKind::EmptyPrompt).into());
        }

        let chat_request = story_text_request(
            request,
            *self.settings.protocol(),
            *self.settings.scene_count(),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to build story text request");
            StoryError::new(StoryErrorKind::TextGeneration)
        })?;

        let response = self.chat.generate(&chat_request).await.map_err(|e| {
            error!(
                provider = self.chat.provider_name(),
                error = %e,
                "Story text generation failed"
            );
            StoryError::new(StoryErrorKind::TextGeneration)
        })?;

        let scenes = read_segments(
            *self.settings.protocol(),
            response.text(),
            *self.settings.scene_count(),
        );
        if scenes.is_empty() {
            error!("Story text response contained no scenes");
            return Err(StoryError::new(StoryErrorKind::TextGeneration).into());
        }

        info!(scenes = scenes.len(), "Generated story text");
        Ok(scenes)
    }

    /// Ask the chat model for one image prompt per scene.
    ///
    /// The result has one slot per scene, in scene order. A slot is `None`
    /// when the model gave no prompt for that scene; see [`fallback_prompt`]
    /// for how gaps are filled.
    ///
    /// # Errors
    ///
    /// [`StoryErrorKind::PromptExpansion`] if the call fails.
    #[instrument(skip(self, scenes), fields(scenes = scenes.len()))]
    pub async fn generate_image_prompts(
        &self,
        scenes: &[String],
        art_style: &str,
    ) -> FabulistResult<Vec<Option<String>>> {
        let chat_request = image_prompt_request(scenes, art_style, *self.settings.protocol())
            .map_err(|e| {
                error!(error = %e, "Failed to build image prompt request");
                StoryError::new(StoryErrorKind::PromptExpansion)
            })?;

        let response = self.chat.generate(&chat_request).await.map_err(|e| {
            error!(
                provider = self.chat.provider_name(),
                error = %e,
                "Image prompt generation failed"
            );
            StoryError::new(StoryErrorKind::PromptExpansion)
        })?;

        let prompts = read_slots(*self.settings.protocol(), response.text(), scenes.len());
        let missing = prompts.iter().filter(|slot| slot.is_none()).count();
        if missing > 0 {
            warn!(
                missing,
                scenes = scenes.len(),
                "Image prompts missing for some scenes, filling with fallbacks"
            );
        }
        debug!(prompts = prompts.len() - missing, "Generated image prompts");
        Ok(prompts)
    }

    /// Request an illustration. Never fails: on any provider error the
    /// outcome is degraded to a random stock photo URL.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn render_image(&self, prompt: &str) -> MediaOutcome {
        match self.images.generate_image(prompt).await {
            Ok(image) => MediaOutcome::resolved(image.url),
            Err(e) => {
                let fallback = fallback_image_url(self.settings.fallback_host());
                warn!(
                    provider = self.images.provider_name(),
                    error = %e,
                    fallback = %fallback,
                    "Image generation failed, using stock photo"
                );
                MediaOutcome::degraded(fallback, e.to_string())
            }
        }
    }

    /// Request narration and store it. Never fails: on any synthesis or
    /// storage error the outcome is degraded to an empty URL.
    #[instrument(skip(self, text, label), fields(label = %label, text_len = text.len()))]
    pub async fn render_narration(&self, text: &str, label: &str) -> MediaOutcome {
        match self.narrate(text, label).await {
            Ok(url) => MediaOutcome::resolved(url),
            Err(e) => {
                warn!(
                    provider = self.speech.provider_name(),
                    error = %e,
                    "Narration unavailable"
                );
                MediaOutcome::degraded("", e.to_string())
            }
        }
    }

    async fn narrate(&self, text: &str, label: &str) -> FabulistResult<String> {
        let clip = self.speech.synthesize(text).await?;
        let metadata = MediaMetadata::audio(clip.mime.clone()).with_label(label);
        let reference = self.storage.store(&clip.data, &metadata).await?;
        match self.storage.url(&reference).await? {
            Some(url) => Ok(url),
            None => Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "no playable URL for {}",
                reference.storage_path
            )))
            .into()),
        }
    }

    /// Illustration and narration for one scene, requested concurrently.
    pub async fn render_media(
        &self,
        text: &str,
        image_prompt: &str,
        label: &str,
    ) -> (MediaOutcome, MediaOutcome) {
        tokio::join!(
            self.render_image(image_prompt),
            self.render_narration(text, label)
        )
    }

    /// Generate a complete story: text, prompts, then media scene by scene.
    ///
    /// Scene ordinals run from 1 to the number of scenes the model returned.
    ///
    /// # Errors
    ///
    /// Fails only if the story text or image prompt step fails; media
    /// problems degrade individual scenes instead.
    #[instrument(skip(self, request), fields(art_style = %request.art_style()))]
    pub async fn generate_complete_story(
        &self,
        request: &StoryRequest,
    ) -> FabulistResult<Vec<StoryScene>> {
        let texts = self.generate_story_text(request).await?;
        let prompts = self
            .generate_image_prompts(&texts, request.art_style())
            .await?;

        let mut scenes = Vec::with_capacity(texts.len());
        for (index, text) in texts.into_iter().enumerate() {
            let order = index + 1;
            let image_prompt = prompts
                .get(index)
                .cloned()
                .flatten()
                .unwrap_or_else(|| fallback_prompt(request.art_style(), &text));

            let (image, audio) = self
                .render_media(&text, &image_prompt, &format!("scene-{}", order))
                .await;

            let scene = StoryScene::new(order, text, image_prompt, image, audio);
            debug!(
                id = %scene.id(),
                order,
                image_degraded = scene.image().is_degraded(),
                audio_degraded = scene.audio().is_degraded(),
                "Scene assembled"
            );
            scenes.push(scene);
        }

        info!(scenes = scenes.len(), "Story generated");
        Ok(scenes)
    }

    /// Rewrite one scene and regenerate its media.
    ///
    /// The result keeps `scene`'s identifier and ordinal. An empty rewrite
    /// keeps the existing text.
    ///
    /// # Errors
    ///
    /// [`StoryErrorKind::SceneRewrite`] if the rewrite or the image prompt
    /// call fails.
    #[instrument(skip(self, scene, request), fields(id = %scene.id(), order = scene.order()))]
    pub async fn regenerate_scene(
        &self,
        scene: &StoryScene,
        request: &StoryRequest,
    ) -> FabulistResult<StoryScene> {
        let chat_request = rewrite_request(scene.text(), request, self.settings.rewrite_model())
            .map_err(|e| {
                error!(error = %e, "Failed to build rewrite request");
                StoryError::new(StoryErrorKind::SceneRewrite)
            })?;

        let response = self.chat.generate(&chat_request).await.map_err(|e| {
            error!(
                provider = self.chat.provider_name(),
                error = %e,
                "Scene rewrite failed"
            );
            StoryError::new(StoryErrorKind::SceneRewrite)
        })?;

        let rewritten = response.text().trim();
        let text = if rewritten.is_empty() {
            warn!("Rewrite came back empty, keeping existing text");
            scene.text().clone()
        } else {
            rewritten.to_string()
        };

        let prompts = self
            .generate_image_prompts(std::slice::from_ref(&text), request.art_style())
            .await
            .map_err(|e| {
                error!(error = %e, "Image prompt for rewritten scene failed");
                StoryError::new(StoryErrorKind::SceneRewrite)
            })?;
        let image_prompt = prompts
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_else(|| fallback_prompt(request.art_style(), &text));

        let (image, audio) = self.render_media(&text, &image_prompt, scene.id()).await;

        info!("Scene regenerated");
        Ok(scene.replace_content(text, image_prompt, image, audio))
    }

    /// Ask the video generator to assemble the scenes.
    #[instrument(skip(self, scenes), fields(scenes = scenes.len()))]
    pub async fn assemble_video(&self, scenes: &[StoryScene]) -> FabulistResult<VideoOutcome> {
        let outcome = self.video.generate_video(scenes).await?;
        if let VideoOutcome::Unsupported { reason } = &outcome {
            info!(reason = %reason, "Video assembly unsupported");
        }
        Ok(outcome)
    }
}
