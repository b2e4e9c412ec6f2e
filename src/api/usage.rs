use crate::Error;
use crate::transport::request::Request;
use crate::types::{
    AgentUsageRequest, EmbeddingUsageRequest, FunctionCallUsageRequest, RagUsageRequest,
    SttUsageRequest, TtsUsageRequest,
};
use serde_json::Value;

/// Usage tracking and cost analysis.
///
/// Tracking endpoints record consumption against the caller's credit
/// account; responses are loosely shaped billing records.
#[derive(Clone)]
pub struct UsageService {
    client: crate::Client,
}

impl UsageService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl UsageService {
    /// `POST /usage/track/tts`
    pub async fn track_tts(&self, usage: &TtsUsageRequest) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "track", "tts"]).json(usage)?)
            .await
    }

    /// `POST /usage/track/stt`
    pub async fn track_stt(&self, usage: &SttUsageRequest) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "track", "stt"]).json(usage)?)
            .await
    }

    /// `POST /usage/track/agent`
    pub async fn track_agent(&self, usage: &AgentUsageRequest) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "track", "agent"]).json(usage)?)
            .await
    }

    /// `POST /usage/track/embeddings`
    pub async fn track_embeddings(&self, usage: &EmbeddingUsageRequest) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "track", "embeddings"]).json(usage)?)
            .await
    }

    /// `POST /usage/track/rag`
    pub async fn track_rag(&self, usage: &RagUsageRequest) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "track", "rag"]).json(usage)?)
            .await
    }

    /// `POST /usage/track/function-call`
    pub async fn track_function_call(
        &self,
        usage: &FunctionCallUsageRequest,
    ) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "track", "function-call"]).json(usage)?)
            .await
    }

    /// `GET /usage/analysis`
    pub async fn analysis(&self, days: Option<u32>) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["usage", "analysis"]).query_opt("days", days))
            .await
    }

    /// `POST /usage/analyze-text`
    ///
    /// Character/token breakdown for a candidate TTS input without
    /// recording any usage.
    pub async fn analyze_text(&self, text: &str) -> Result<Value, Error> {
        self.client
            .send_json(
                Request::post(["usage", "analyze-text"])
                    .json(&serde_json::json!({ "text": text }))?,
            )
            .await
    }

    /// `POST /usage/estimate`
    pub async fn estimate(&self, request: &Value) -> Result<Value, Error> {
        self.client
            .send_json(Request::post(["usage", "estimate"]).json(request)?)
            .await
    }
}
