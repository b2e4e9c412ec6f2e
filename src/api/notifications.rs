use crate::Error;
use crate::transport::request::Request;
use crate::types::{NotificationResponse, UnreadCountResponse};

/// User notification inbox.
#[derive(Clone)]
pub struct NotificationsService {
    client: crate::Client,
}

impl NotificationsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl NotificationsService {
    /// `GET /notifications/`
    pub async fn list(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
        unread_only: Option<bool>,
    ) -> Result<Vec<NotificationResponse>, Error> {
        self.client
            .send_json(
                Request::get(["notifications", ""])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit)
                    .query_opt("unread_only", unread_only),
            )
            .await
    }

    /// `GET /notifications/unread-count`
    pub async fn unread_count(&self) -> Result<UnreadCountResponse, Error> {
        self.client
            .send_json(Request::get(["notifications", "unread-count"]))
            .await
    }

    /// `PUT /notifications/<id>/read`
    pub async fn mark_read(&self, notification_id: &str) -> Result<NotificationResponse, Error> {
        self.client
            .send_json(Request::put(["notifications", notification_id, "read"]))
            .await
    }

    /// `PUT /notifications/mark-all-read`
    pub async fn mark_all_read(&self) -> Result<(), Error> {
        self.client
            .send_unit(Request::put(["notifications", "mark-all-read"]))
            .await
    }

    /// `DELETE /notifications/<id>`
    pub async fn delete(&self, notification_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["notifications", notification_id]))
            .await
    }

    /// `DELETE /notifications/clear-all`
    pub async fn clear_all(&self) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["notifications", "clear-all"]))
            .await
    }
}
