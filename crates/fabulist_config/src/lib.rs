//! Layered configuration for Fabulist.
//!
//! Settings are read from, in increasing precedence:
//! - Bundled defaults (include_str! from fabulist.toml)
//! - `~/.config/fabulist/fabulist.toml`
//! - `./fabulist.toml`
//! - `FABULIST_<SECTION>__<KEY>` environment variables
//!
//! API keys are not part of [`FabulistConfig`]; they are read
//! from the process environment by [`Credentials`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod settings;

pub use credentials::{Credentials, ELEVENLABS_API_KEY, OPENAI_API_KEY};
pub use settings::{
    ChatConfig, FabulistConfig, ImageConfig, PipelineConfig, SpeechConfig, StorageConfig,
};
