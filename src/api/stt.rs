use crate::Error;
use crate::transport::request::{MultipartBuilder, Request};
use crate::types::{
    TranscribeOptions, TranscriptionListResponse, TranscriptionResponse,
    TranscriptionStatusResponse,
};
use serde_json::Value;

/// Speech-to-text transcription uploads and results.
#[derive(Clone)]
pub struct SttService {
    client: crate::Client,
}

impl SttService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl SttService {
    /// `POST /stt/transcribe` (multipart audio upload)
    ///
    /// Transcription runs asynchronously; poll [`Self::status`] until the
    /// returned record reaches a terminal state.
    pub async fn transcribe(
        &self,
        filename: &str,
        content_type: Option<&str>,
        audio: Vec<u8>,
        options: &TranscribeOptions,
    ) -> Result<TranscriptionResponse, Error> {
        let mut form = MultipartBuilder::new().file("file", filename, content_type, audio);
        if let Some(language) = &options.language {
            form = form.text("language", language.clone());
        }
        if let Some(provider) = &options.provider {
            form = form.text("provider", provider.clone());
        }
        self.client
            .send_json(Request::post(["stt", "transcribe"]).body(form.build()))
            .await
    }

    /// `GET /stt/transcriptions`
    pub async fn list(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<TranscriptionListResponse, Error> {
        self.client
            .send_json(
                Request::get(["stt", "transcriptions"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /stt/transcriptions/<id>`
    pub async fn get(&self, transcription_id: u64) -> Result<TranscriptionResponse, Error> {
        self.client
            .send_json(Request::get([
                "stt",
                "transcriptions",
                &transcription_id.to_string(),
            ]))
            .await
    }

    /// `GET /stt/transcriptions/<id>/status`
    pub async fn status(
        &self,
        transcription_id: u64,
    ) -> Result<TranscriptionStatusResponse, Error> {
        self.client
            .send_json(Request::get([
                "stt",
                "transcriptions",
                &transcription_id.to_string(),
                "status",
            ]))
            .await
    }

    /// `DELETE /stt/transcriptions/<id>`
    pub async fn delete(&self, transcription_id: u64) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete([
                "stt",
                "transcriptions",
                &transcription_id.to_string(),
            ]))
            .await
    }

    /// `GET /stt/stats`
    pub async fn stats(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["stt", "stats"])).await
    }
}
