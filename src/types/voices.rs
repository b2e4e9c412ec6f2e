use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicePublic {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub gender: String,
    pub language: String,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub preview_text: Option<String>,
    /// Base64 audio sample, present only when `include_buffer` is requested.
    #[serde(default)]
    pub preview_audio_base64: Option<String>,
}

/// Filters accepted by `GET voices/`.
#[derive(Debug, Clone, Default)]
pub struct VoiceFilter {
    pub include_buffer: Option<bool>,
    pub premium_only: Option<bool>,
    pub language: Option<String>,
    pub enabled_only: Option<bool>,
    pub demo_only: Option<bool>,
}
