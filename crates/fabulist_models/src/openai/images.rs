//! OpenAI image generation client.

use super::PROVIDER;
use crate::http::{endpoint, json, send};
use crate::{ImageGenerationRequest, ImageGenerationResponse, image_from_response};
use async_trait::async_trait;
use fabulist_core::GeneratedImage;
use fabulist_error::FabulistResult;
use fabulist_interface::ImageGenerator;
use tracing::{debug, instrument};

/// Client for `{base_url}/images/generations`.
#[derive(Clone)]
pub struct OpenAiImageClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
    model: String,
    size: String,
    quality: String,
}

impl OpenAiImageClient {
    /// Create an image client with the default dall-e-3, 1024x1024,
    /// standard-quality settings.
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            url: endpoint(base_url, "images/generations"),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
        }
    }

    /// Override model, size and quality.
    pub fn with_options(
        mut self,
        model: impl Into<String>,
        size: impl Into<String>,
        quality: impl Into<String>,
    ) -> Self {
        self.model = model.into();
        self.size = size.into();
        self.quality = quality.into();
        self
    }

    /// Request body for a prompt.
    pub fn request_for(&self, prompt: &str) -> ImageGenerationRequest {
        ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            size: self.size.clone(),
            quality: self.quality.clone(),
            n: 1,
        }
    }
}

impl std::fmt::Debug for OpenAiImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiImageClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("size", &self.size)
            .field("quality", &self.quality)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    #[instrument(skip(self, prompt), fields(provider = PROVIDER, model = %self.model, prompt_len = prompt.len()))]
    async fn generate_image(&self, prompt: &str) -> FabulistResult<GeneratedImage> {
        let body = self.request_for(prompt);

        let response = send(
            PROVIDER,
            self.client
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;
        let response: ImageGenerationResponse = json(PROVIDER, response).await?;

        let image = image_from_response(response)?;
        debug!(url = %image.url, "Image generated");
        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
