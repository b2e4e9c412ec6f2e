use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub id: u64,
    pub user_id: String,
    pub original_filename: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub provider_used: Option<String>,
    #[serde(default)]
    pub transcription_text: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub language_detected: Option<String>,
    pub status: String,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub segments: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionListResponse {
    pub transcriptions: Vec<TranscriptionResponse>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionStatusResponse {
    pub id: u64,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Options for the multipart `POST stt/transcribe` upload.
#[derive(Debug, Clone, Default)]
pub struct TranscribeOptions {
    pub language: Option<String>,
    pub provider: Option<String>,
}
