use crate::Error;
use crate::transport::request::{MultipartBuilder, Request};
use crate::types::{
    AgentDocumentLink, AgentDocumentLinkResponse, AgentDocumentLinkUpdate,
    AgentDocumentListResponse, RagDocumentListResponse, RagDocumentResponse, RagDocumentUpdate,
    RagQueryCreate, RagQueryListResponse, RagQueryResult, RagStats,
};
use serde_json::Value;

/// Retrieval-augmented generation: document store, agent links and queries.
#[derive(Clone)]
pub struct RagService {
    client: crate::Client,
}

impl RagService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl RagService {
    /// `POST /rag/documents/upload` (multipart)
    ///
    /// `content_type` is the MIME type of the uploaded file, e.g.
    /// `application/pdf`; text extraction runs asynchronously and is
    /// reported through `extraction_status`.
    pub async fn upload_document(
        &self,
        name: &str,
        filename: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
        description: Option<&str>,
    ) -> Result<RagDocumentResponse, Error> {
        let mut form = MultipartBuilder::new()
            .file("file", filename, content_type, data)
            .text("name", name);
        if let Some(description) = description {
            form = form.text("description", description);
        }
        self.client
            .send_json(Request::post(["rag", "documents", "upload"]).body(form.build()))
            .await
    }

    /// `GET /rag/documents`
    pub async fn list_documents(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<RagDocumentListResponse, Error> {
        self.client
            .send_json(
                Request::get(["rag", "documents"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /rag/documents/<id>`
    pub async fn get_document(&self, document_id: &str) -> Result<RagDocumentResponse, Error> {
        self.client
            .send_json(Request::get(["rag", "documents", document_id]))
            .await
    }

    /// `PUT /rag/documents/<id>`
    pub async fn update_document(
        &self,
        document_id: &str,
        update: &RagDocumentUpdate,
    ) -> Result<RagDocumentResponse, Error> {
        self.client
            .send_json(Request::put(["rag", "documents", document_id]).json(update)?)
            .await
    }

    /// `DELETE /rag/documents/<id>`
    pub async fn delete_document(&self, document_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["rag", "documents", document_id]))
            .await
    }

    /// `GET /rag/documents/<id>/agents`
    ///
    /// Agents whose knowledge base includes this document.
    pub async fn document_agents(&self, document_id: &str) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["rag", "documents", document_id, "agents"]))
            .await
    }

    /* ───────────── agent links ───────────── */

    /// `GET /rag/agents/<agent_id>/documents`
    pub async fn agent_documents(
        &self,
        agent_id: &str,
    ) -> Result<AgentDocumentListResponse, Error> {
        self.client
            .send_json(Request::get(["rag", "agents", agent_id, "documents"]))
            .await
    }

    /// `POST /rag/agents/<agent_id>/documents`
    pub async fn link_document(
        &self,
        agent_id: &str,
        link: &AgentDocumentLink,
    ) -> Result<AgentDocumentLinkResponse, Error> {
        self.client
            .send_json(Request::post(["rag", "agents", agent_id, "documents"]).json(link)?)
            .await
    }

    /// `PUT /rag/agents/<agent_id>/documents/<link_id>`
    pub async fn update_document_link(
        &self,
        agent_id: &str,
        link_id: &str,
        update: &AgentDocumentLinkUpdate,
    ) -> Result<AgentDocumentLinkResponse, Error> {
        self.client
            .send_json(
                Request::put(["rag", "agents", agent_id, "documents", link_id]).json(update)?,
            )
            .await
    }

    /// `DELETE /rag/agents/<agent_id>/documents/<link_id>`
    pub async fn unlink_document(&self, agent_id: &str, link_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["rag", "agents", agent_id, "documents", link_id]))
            .await
    }

    /* ───────────── queries ───────────── */

    /// `POST /rag/agents/<agent_id>/query`
    pub async fn query_agent(
        &self,
        agent_id: &str,
        query: &RagQueryCreate,
    ) -> Result<RagQueryResult, Error> {
        self.client
            .send_json(Request::post(["rag", "agents", agent_id, "query"]).json(query)?)
            .await
    }

    /// `GET /rag/agents/<agent_id>/queries`
    pub async fn agent_queries(
        &self,
        agent_id: &str,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<RagQueryListResponse, Error> {
        self.client
            .send_json(
                Request::get(["rag", "agents", agent_id, "queries"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /rag/agents/<agent_id>/stats`
    pub async fn agent_stats(&self, agent_id: &str) -> Result<RagStats, Error> {
        self.client
            .send_json(Request::get(["rag", "agents", agent_id, "stats"]))
            .await
    }

    /// `POST /rag/query` (query across all of the caller's documents)
    pub async fn query(&self, query: &RagQueryCreate) -> Result<RagQueryResult, Error> {
        self.client
            .send_json(Request::post(["rag", "query"]).json(query)?)
            .await
    }

    /// `GET /rag/queries`
    pub async fn queries(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<RagQueryListResponse, Error> {
        self.client
            .send_json(
                Request::get(["rag", "queries"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /rag/stats`
    pub async fn stats(&self) -> Result<RagStats, Error> {
        self.client.send_json(Request::get(["rag", "stats"])).await
    }
}
