use crate::Error;
use crate::transport::request::Request;
use crate::types::{
    AgentCreate, AgentDocumentLink, AgentDocumentLinkResponse, AgentDocumentLinkUpdate,
    AgentDocumentListResponse, AgentListResponse, AgentResponse, AgentUpdate, ExternalApiRequest,
    FunctionCallRequest, FunctionCallResponse, RagQueryCreate, RagQueryListResponse,
    RagQueryResult, WebhookCreate, WebhookResponse, WebhookUpdate,
};
use serde_json::Value;

/// Voice agent CRUD, webhooks, knowledge-base links and function calls.
#[derive(Clone)]
pub struct AgentsService {
    client: crate::Client,
}

impl AgentsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl AgentsService {
    /// `POST /agents/`
    pub async fn create(&self, agent: &AgentCreate) -> Result<AgentResponse, Error> {
        self.client
            .send_json(Request::post(["agents", ""]).json(agent)?)
            .await
    }

    /// `GET /agents/`
    pub async fn list(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<AgentListResponse, Error> {
        self.client
            .send_json(
                Request::get(["agents", ""])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /agents/public`
    pub async fn list_public(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<AgentListResponse, Error> {
        self.client
            .send_json(
                Request::get(["agents", "public"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /agents/<id>`
    pub async fn get(&self, agent_id: &str) -> Result<AgentResponse, Error> {
        self.client
            .send_json(Request::get(["agents", agent_id]))
            .await
    }

    /// `PUT /agents/<id>`
    pub async fn update(&self, agent_id: &str, update: &AgentUpdate) -> Result<AgentResponse, Error> {
        self.client
            .send_json(Request::put(["agents", agent_id]).json(update)?)
            .await
    }

    /// `DELETE /agents/<id>`
    pub async fn delete(&self, agent_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["agents", agent_id]))
            .await
    }

    /// `GET /agents/<id>/stats`
    ///
    /// Loosely shaped; the key set varies with the agent's enabled features.
    pub async fn stats(&self, agent_id: &str) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["agents", agent_id, "stats"]))
            .await
    }

    /* ───────────── webhooks ───────────── */

    /// `POST /agents/<id>/webhooks`
    pub async fn create_webhook(
        &self,
        agent_id: &str,
        webhook: &WebhookCreate,
    ) -> Result<WebhookResponse, Error> {
        self.client
            .send_json(Request::post(["agents", agent_id, "webhooks"]).json(webhook)?)
            .await
    }

    /// `GET /agents/<id>/webhooks`
    pub async fn list_webhooks(&self, agent_id: &str) -> Result<Vec<WebhookResponse>, Error> {
        self.client
            .send_json(Request::get(["agents", agent_id, "webhooks"]))
            .await
    }

    /// `PUT /agents/webhooks/<webhook_id>`
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        update: &WebhookUpdate,
    ) -> Result<WebhookResponse, Error> {
        self.client
            .send_json(Request::put(["agents", "webhooks", webhook_id]).json(update)?)
            .await
    }

    /// `DELETE /agents/webhooks/<webhook_id>`
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["agents", "webhooks", webhook_id]))
            .await
    }

    /* ───────────── knowledge-base documents ───────────── */

    /// `GET /agents/<id>/documents`
    pub async fn list_documents(&self, agent_id: &str) -> Result<AgentDocumentListResponse, Error> {
        self.client
            .send_json(Request::get(["agents", agent_id, "documents"]))
            .await
    }

    /// `POST /agents/<id>/documents`
    pub async fn link_document(
        &self,
        agent_id: &str,
        link: &AgentDocumentLink,
    ) -> Result<AgentDocumentLinkResponse, Error> {
        self.client
            .send_json(Request::post(["agents", agent_id, "documents"]).json(link)?)
            .await
    }

    /// `PUT /agents/<id>/documents/<link_id>`
    pub async fn update_document_link(
        &self,
        agent_id: &str,
        link_id: &str,
        update: &AgentDocumentLinkUpdate,
    ) -> Result<AgentDocumentLinkResponse, Error> {
        self.client
            .send_json(Request::put(["agents", agent_id, "documents", link_id]).json(update)?)
            .await
    }

    /// `DELETE /agents/<id>/documents/<link_id>`
    pub async fn unlink_document(&self, agent_id: &str, link_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["agents", agent_id, "documents", link_id]))
            .await
    }

    /* ───────────── knowledge-base queries ───────────── */

    /// `POST /agents/<id>/query`
    pub async fn query(
        &self,
        agent_id: &str,
        query: &RagQueryCreate,
    ) -> Result<RagQueryResult, Error> {
        self.client
            .send_json(Request::post(["agents", agent_id, "query"]).json(query)?)
            .await
    }

    /// `GET /agents/<id>/queries`
    pub async fn queries(
        &self,
        agent_id: &str,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<RagQueryListResponse, Error> {
        self.client
            .send_json(
                Request::get(["agents", agent_id, "queries"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /* ───────────── function calls ───────────── */

    /// `POST /agents/<id>/function-calls`
    pub async fn call_function(
        &self,
        agent_id: &str,
        call: &FunctionCallRequest,
    ) -> Result<FunctionCallResponse, Error> {
        self.client
            .send_json(Request::post(["agents", agent_id, "function-calls"]).json(call)?)
            .await
    }

    /// `POST /agents/<id>/function-calls/external-api`
    pub async fn call_external_api(
        &self,
        agent_id: &str,
        call: &ExternalApiRequest,
    ) -> Result<FunctionCallResponse, Error> {
        self.client
            .send_json(
                Request::post(["agents", agent_id, "function-calls", "external-api"]).json(call)?,
            )
            .await
    }

    /// `GET /agents/<id>/function-calls`
    pub async fn list_function_calls(
        &self,
        agent_id: &str,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.client
            .send_json(
                Request::get(["agents", agent_id, "function-calls"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /agents/function-calls/available`
    pub async fn available_functions(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["agents", "function-calls", "available"]))
            .await
    }
}
