//! Generative provider errors (chat, image, speech, video).

/// Provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Request never produced a response
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },
    /// Provider rejected the request for quota reasons (HTTP 429)
    #[display("Rate limit exceeded: {}", _0)]
    RateLimit(String),
    /// Provider refused the prompt on content grounds
    #[display("Content policy rejection: {}", _0)]
    ContentPolicy(String),
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
    /// Response decoded but carried no usable output
    #[display("Response contained no output: {}", _0)]
    EmptyResponse(String),
    /// Request construction failed
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl ProviderErrorKind {
    /// Classify a non-success HTTP status into a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabulist_error::ProviderErrorKind;
    ///
    /// let kind = ProviderErrorKind::from_status(429, "slow down");
    /// assert!(matches!(kind, ProviderErrorKind::RateLimit(_)));
    /// ```
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => Self::RateLimit(message),
            400 if message.contains("content_policy") => Self::ContentPolicy(message),
            _ => Self::Api { status, message },
        }
    }
}

/// Provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error ({}): {} at line {} in {}", provider, kind, line, file)]
pub struct ProviderError {
    /// Provider that raised the error (e.g. "openai", "elevenlabs")
    pub provider: &'static str,
    /// The specific error kind
    pub kind: ProviderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error.
    #[track_caller]
    pub fn new(provider: &'static str, kind: ProviderErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            provider,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
