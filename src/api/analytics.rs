use crate::Error;
use crate::transport::request::Request;
use serde_json::Value;

/// Administrative analytics rollups. All responses are loosely shaped;
/// the platform evolves these reports without versioning them.
#[derive(Clone)]
pub struct AnalyticsService {
    client: crate::Client,
}

impl AnalyticsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl AnalyticsService {
    /// `GET /analytics/summary`
    pub async fn summary(&self, days: Option<u32>) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["analytics", "summary"]).query_opt("days", days))
            .await
    }

    /// `GET /analytics/users/<id>`
    pub async fn user_analytics(&self, user_id: &str, days: Option<u32>) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["analytics", "users", user_id]).query_opt("days", days))
            .await
    }

    /// `GET /analytics/users/<id>/daily`
    pub async fn user_daily_stats(
        &self,
        user_id: &str,
        days: Option<u32>,
    ) -> Result<Value, Error> {
        self.client
            .send_json(
                Request::get(["analytics", "users", user_id, "daily"]).query_opt("days", days),
            )
            .await
    }
}
