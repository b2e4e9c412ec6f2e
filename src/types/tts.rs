use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub voice_id: u64,
    pub input_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_gain_db: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisResponse {
    pub id: u64,
    pub user_id: String,
    pub voice_id: u64,
    pub input_text: String,
    #[serde(default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub speaking_rate: Option<f64>,
    #[serde(default)]
    pub pitch: Option<f64>,
    #[serde(default)]
    pub volume_gain_db: Option<f64>,
    #[serde(default)]
    pub output_file_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub duration: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisListResponse {
    pub syntheses: Vec<SynthesisResponse>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisStatsResponse {
    pub total_syntheses: u64,
    pub completed_syntheses: u64,
    pub failed_syntheses: u64,
    pub processing_syntheses: u64,
}
