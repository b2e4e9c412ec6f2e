use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A live conversation room between a user and an agent.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub session_id: u64,
    pub agent_id: u64,
    pub room_name: String,
    pub livekit_token: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub ended_at: Option<String>,
}

/// Text turn injected into a running session.
#[derive(Debug, Clone, Serialize)]
pub struct TextMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// The agent's reply to an injected [`TextMessage`].
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    pub content: String,
    pub agent_id: u64,
    pub session_id: u64,
    pub timestamp: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Runtime command sent to the agent driving a session.
#[derive(Debug, Clone, Serialize)]
pub struct AgentControl {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}
