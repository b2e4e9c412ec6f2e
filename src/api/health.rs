use crate::Error;
use crate::transport::request::Request;
use crate::types::HealthResponse;

/// Platform liveness and capacity check.
#[derive(Clone)]
pub struct HealthService {
    client: crate::Client,
}

impl HealthService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl HealthService {
    /// `GET /health`
    pub async fn check(&self) -> Result<HealthResponse, Error> {
        self.client.send_json(Request::get(["health"])).await
    }
}
