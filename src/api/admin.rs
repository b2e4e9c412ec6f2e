use crate::Error;
use crate::transport::request::Request;
use serde_json::Value;

/// Administrative rollups over the whole platform. Requires an account
/// with admin scope; loosely shaped like the analytics reports.
#[derive(Clone)]
pub struct AdminService {
    client: crate::Client,
}

impl AdminService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl AdminService {
    /// `GET /metrics`
    pub async fn metrics(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["metrics"])).await
    }

    /// `GET /admin/users`
    pub async fn list_users(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["admin", "users"]))
            .await
    }

    /// `GET /admin/agents`
    pub async fn list_agents(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["admin", "agents"]))
            .await
    }

    /// `GET /admin/sessions`
    pub async fn list_sessions(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["admin", "sessions"]))
            .await
    }

    /// `GET /admin/usage`
    pub async fn usage(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["admin", "usage"])).await
    }
}
