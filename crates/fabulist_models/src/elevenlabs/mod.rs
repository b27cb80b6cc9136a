//! ElevenLabs text-to-speech.

mod client;
mod dto;

pub use client::ElevenLabsClient;
pub use dto::{SpeechRequest, VoiceSettings};

pub(crate) const PROVIDER: &str = "elevenlabs";
