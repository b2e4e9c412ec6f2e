use crate::Error;
use crate::transport::request::Request;
use crate::types::{
    SynthesisListResponse, SynthesisRequest, SynthesisResponse, SynthesisStatsResponse,
};

/// Text-to-speech synthesis jobs and audio downloads.
#[derive(Clone)]
pub struct TtsService {
    client: crate::Client,
}

impl TtsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl TtsService {
    /// `POST /tts/synthesize`
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResponse, Error> {
        self.client
            .send_json(Request::post(["tts", "synthesize"]).json(request)?)
            .await
    }

    /// `GET /tts/syntheses`
    pub async fn list(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<SynthesisListResponse, Error> {
        self.client
            .send_json(
                Request::get(["tts", "syntheses"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /tts/syntheses/<id>`
    pub async fn get(&self, synthesis_id: u64) -> Result<SynthesisResponse, Error> {
        self.client
            .send_json(Request::get(["tts", "syntheses", &synthesis_id.to_string()]))
            .await
    }

    /// `GET /tts/syntheses/<id>/download`
    ///
    /// Raw audio bytes in the synthesis job's `output_format`.
    pub async fn download(&self, synthesis_id: u64) -> Result<Vec<u8>, Error> {
        self.client
            .send_bytes(Request::get([
                "tts",
                "syntheses",
                &synthesis_id.to_string(),
                "download",
            ]))
            .await
    }

    /// `DELETE /tts/syntheses/<id>`
    pub async fn delete(&self, synthesis_id: u64) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete([
                "tts",
                "syntheses",
                &synthesis_id.to_string(),
            ]))
            .await
    }

    /// `GET /tts/stats`
    pub async fn stats(&self) -> Result<SynthesisStatsResponse, Error> {
        self.client.send_json(Request::get(["tts", "stats"])).await
    }
}
