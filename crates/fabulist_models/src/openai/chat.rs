//! OpenAI-compatible chat completion client.

use super::PROVIDER;
use crate::http::{endpoint, json, send};
use crate::{ChatCompletionResponse, from_chat_response, to_chat_request};
use async_trait::async_trait;
use fabulist_core::{GenerateRequest, GenerateResponse};
use fabulist_error::FabulistResult;
use fabulist_interface::ChatDriver;
use tracing::{debug, instrument};

/// Chat client for any endpoint speaking the OpenAI chat completions API.
#[derive(Clone)]
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiChatClient {
    /// Create a client for `{base_url}/chat/completions`.
    ///
    /// `model` is used for requests that do not name one.
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
    ) -> Self {
        let model = model.into();
        let url = endpoint(base_url, "chat/completions");
        debug!(model = %model, url = %url, "Creating chat client");
        Self {
            client,
            api_key: api_key.into(),
            model,
            url,
        }
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for OpenAiChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiChatClient")
            .field("model", &self.model)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatDriver for OpenAiChatClient {
    #[instrument(skip(self, req), fields(provider = PROVIDER, default_model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> FabulistResult<GenerateResponse> {
        let body = to_chat_request(req, &self.model)?;
        debug!(messages = body.messages().len(), "Sending chat completion request");

        let response = send(
            PROVIDER,
            self.client
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;
        let response: ChatCompletionResponse = json(PROVIDER, response).await?;

        let generated = from_chat_response(response)?;
        debug!(chars = generated.text().len(), "Chat completion successful");
        Ok(generated)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
