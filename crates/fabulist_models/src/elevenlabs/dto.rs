//! Wire types for the ElevenLabs text-to-speech endpoint.

use serde::{Deserialize, Serialize};

/// Text-to-speech request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,
    /// Speech model
    pub model_id: String,
    /// Voice tuning
    pub voice_settings: VoiceSettings,
}

/// Voice tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// 0.0 (expressive) to 1.0 (steady)
    pub stability: f32,
    /// 0.0 to 1.0
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}
