use crate::Error;
use crate::transport::request::Request;
use crate::types::{VoiceFilter, VoicePublic};

/// Voice catalogue browsing and audio previews.
#[derive(Clone)]
pub struct VoicesService {
    client: crate::Client,
}

impl VoicesService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl VoicesService {
    /// `GET /voices/`
    pub async fn list(&self, filter: &VoiceFilter) -> Result<Vec<VoicePublic>, Error> {
        self.client
            .send_json(
                Request::get(["voices", ""])
                    .query_opt("include_buffer", filter.include_buffer)
                    .query_opt("premium_only", filter.premium_only)
                    .query_opt("language", filter.language.as_deref())
                    .query_opt("enabled_only", filter.enabled_only)
                    .query_opt("demo_only", filter.demo_only),
            )
            .await
    }

    /// `GET /voices/languages`
    pub async fn languages(&self) -> Result<Vec<String>, Error> {
        self.client
            .send_json(Request::get(["voices", "languages"]))
            .await
    }

    /// `GET /voices/<id>`
    pub async fn get(&self, voice_id: u64) -> Result<VoicePublic, Error> {
        self.client
            .send_json(Request::get(["voices", &voice_id.to_string()]))
            .await
    }

    /// `GET /voices/<id>/preview`
    ///
    /// Raw audio bytes in the voice's native sample format.
    pub async fn preview(&self, voice_id: u64) -> Result<Vec<u8>, Error> {
        self.client
            .send_bytes(Request::get(["voices", &voice_id.to_string(), "preview"]))
            .await
    }
}
