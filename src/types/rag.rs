use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct RagDocumentResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub extracted_text: Option<String>,
    pub extraction_status: String,
    #[serde(default)]
    pub extraction_error: Option<String>,
    #[serde(default)]
    pub document_metadata: Option<Value>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagDocumentListResponse {
    pub documents: Vec<RagDocumentResponse>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Partial update for `PUT rag/documents/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RagDocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Link between an uploaded document and an agent's knowledge base.
#[derive(Debug, Clone, Serialize)]
pub struct AgentDocumentLink {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentDocumentLinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentDocumentLinkResponse {
    pub id: String,
    pub agent_id: String,
    pub document_id: String,
    #[serde(default)]
    pub priority: Option<u32>,
    pub is_enabled: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentDocumentListResponse {
    pub documents: Vec<AgentDocumentLinkResponse>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RagQueryCreate {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagQueryResult {
    pub id: String,
    pub query: String,
    pub answer: String,
    #[serde(default)]
    pub source_documents: Vec<String>,
    #[serde(default)]
    pub tokens_used: Option<u64>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagQueryListResponse {
    pub queries: Vec<RagQueryResult>,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagStats {
    pub total_documents: u64,
    pub active_documents: u64,
    pub total_queries: u64,
    pub successful_queries: u64,
    pub failed_queries: u64,
}
