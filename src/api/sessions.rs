use crate::Error;
use crate::transport::request::Request;
use crate::types::{AgentControl, AgentReply, SessionResponse, TextMessage};
use serde_json::Value;

/// Live conversation session lifecycle: start/end, text turns, agent
/// control and conversation logs.
#[derive(Clone)]
pub struct SessionsService {
    client: crate::Client,
}

impl SessionsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl SessionsService {
    /// `POST /sessions/<agent_id>`
    pub async fn start(&self, agent_id: u64) -> Result<SessionResponse, Error> {
        self.client
            .send_json(Request::post(["sessions", &agent_id.to_string()]))
            .await
    }

    /// `GET /sessions`
    pub async fn list(&self) -> Result<Vec<SessionResponse>, Error> {
        self.client.send_json(Request::get(["sessions"])).await
    }

    /// `GET /sessions/<id>`
    pub async fn get(&self, session_id: u64) -> Result<SessionResponse, Error> {
        self.client
            .send_json(Request::get(["sessions", &session_id.to_string()]))
            .await
    }

    /// `POST /sessions/<id>/end`
    pub async fn end(&self, session_id: u64) -> Result<(), Error> {
        self.client
            .send_unit(Request::post(["sessions", &session_id.to_string(), "end"]))
            .await
    }

    /// `POST /sessions/<id>/message`
    pub async fn send_message(
        &self,
        session_id: u64,
        message: &TextMessage,
    ) -> Result<AgentReply, Error> {
        self.client
            .send_json(
                Request::post(["sessions", &session_id.to_string(), "message"]).json(message)?,
            )
            .await
    }

    /// `POST /sessions/<id>/agent/control`
    pub async fn control_agent(&self, session_id: u64, control: &AgentControl) -> Result<(), Error> {
        self.client
            .send_unit(
                Request::post(["sessions", &session_id.to_string(), "agent", "control"])
                    .json(control)?,
            )
            .await
    }

    /// `POST /sessions/<id>/agent/prompt`
    pub async fn update_agent_prompt(&self, session_id: u64, prompt: &Value) -> Result<(), Error> {
        self.client
            .send_unit(
                Request::post(["sessions", &session_id.to_string(), "agent", "prompt"])
                    .json(prompt)?,
            )
            .await
    }

    /// `GET /sessions/<id>/conversation`
    pub async fn conversation_history(
        &self,
        session_id: u64,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, Error> {
        self.client
            .send_json(
                Request::get(["sessions", &session_id.to_string(), "conversation"])
                    .query_opt("limit", limit)
                    .query_opt("offset", offset),
            )
            .await
    }

    /// `POST /sessions/<id>/logs`
    pub async fn add_conversation_log(&self, session_id: u64, entry: &Value) -> Result<(), Error> {
        self.client
            .send_unit(
                Request::post(["sessions", &session_id.to_string(), "logs"]).json(entry)?,
            )
            .await
    }

    /// `GET /sessions/<id>/logs`
    pub async fn conversation_logs(&self, session_id: u64) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["sessions", &session_id.to_string(), "logs"]))
            .await
    }

    /// `GET /sessions/<id>/status`
    pub async fn status(&self, session_id: u64) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["sessions", &session_id.to_string(), "status"]))
            .await
    }
}
