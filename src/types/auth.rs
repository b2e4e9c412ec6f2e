use serde::{Deserialize, Serialize};

/// Payload for `POST auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Access/refresh pair returned by login and refresh.
///
/// `refresh_token` is absent for API-key-style logins that only mint a
/// short-lived bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
}

/// Optional OAuth2 password-grant extras accepted by `POST auth/login`.
#[derive(Debug, Clone, Default)]
pub struct LoginOptions {
    pub grant_type: Option<String>,
    pub scope: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}
