use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub status: String,
    pub is_read: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnreadCountResponse {
    pub unread_count: u64,
}
