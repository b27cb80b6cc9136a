//! Shared HTTP plumbing for provider clients.

use fabulist_error::{FabulistResult, HttpError, ProviderError, ProviderErrorKind};
use std::time::Duration;

/// Build the reqwest client shared by every provider.
///
/// `timeout` applies to each whole request; `None` keeps reqwest's default.
///
/// # Errors
///
/// Returns an HTTP error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Option<Duration>) -> FabulistResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        HttpError::new(format!("Failed to build HTTP client: {}", e)).into()
    })
}

/// Send a prepared request and return the response if its status is success.
pub(crate) async fn send(
    provider: &'static str,
    request: reqwest::RequestBuilder,
) -> FabulistResult<reqwest::Response> {
    let response = request.send().await.map_err(|e| {
        tracing::error!(provider, "Request failed: {}", e);
        ProviderError::new(provider, ProviderErrorKind::Http(e.to_string()))
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| status.to_string());
    tracing::error!(provider, status = status.as_u16(), "Provider returned error");
    Err(ProviderError::new(provider, ProviderErrorKind::from_status(status.as_u16(), body)).into())
}

/// Decode a JSON body.
pub(crate) async fn json<T: serde::de::DeserializeOwned>(
    provider: &'static str,
    response: reqwest::Response,
) -> FabulistResult<T> {
    response.json().await.map_err(|e| {
        tracing::error!(provider, "Failed to parse response: {}", e);
        ProviderError::new(provider, ProviderErrorKind::ResponseParsing(e.to_string())).into()
    })
}

/// Join an API root and a path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            endpoint("https://api.openai.com/v1/", "/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            endpoint("https://api.elevenlabs.io", "v1/text-to-speech/abc"),
            "https://api.elevenlabs.io/v1/text-to-speech/abc"
        );
    }
}
