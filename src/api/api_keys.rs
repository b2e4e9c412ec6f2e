use crate::Error;
use crate::transport::request::Request;
use crate::types::{
    ApiKeyCreate, ApiKeyCreateResponse, ApiKeyListResponse, ApiKeyResponse, ApiKeyRevoke,
    ApiKeyUpdate, AvailableScopesResponse,
};

/// Programmatic API key management.
///
/// The full secret key is only present in the creation response; every
/// later read exposes `key_prefix` alone.
#[derive(Clone)]
pub struct ApiKeysService {
    client: crate::Client,
}

impl ApiKeysService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl ApiKeysService {
    /// `GET /auth/api-keys/scopes`
    pub async fn available_scopes(&self) -> Result<AvailableScopesResponse, Error> {
        self.client
            .send_json(Request::get(["auth", "api-keys", "scopes"]))
            .await
    }

    /// `POST /auth/api-keys/`
    pub async fn create(&self, key: &ApiKeyCreate) -> Result<ApiKeyCreateResponse, Error> {
        self.client
            .send_json(Request::post(["auth", "api-keys", ""]).json(key)?)
            .await
    }

    /// `GET /auth/api-keys/`
    pub async fn list(&self) -> Result<ApiKeyListResponse, Error> {
        self.client
            .send_json(Request::get(["auth", "api-keys", ""]))
            .await
    }

    /// `GET /auth/api-keys/<id>`
    pub async fn get(&self, key_id: &str) -> Result<ApiKeyResponse, Error> {
        self.client
            .send_json(Request::get(["auth", "api-keys", key_id]))
            .await
    }

    /// `PUT /auth/api-keys/<id>`
    pub async fn update(&self, key_id: &str, update: &ApiKeyUpdate) -> Result<ApiKeyResponse, Error> {
        self.client
            .send_json(Request::put(["auth", "api-keys", key_id]).json(update)?)
            .await
    }

    /// `DELETE /auth/api-keys/<id>`
    pub async fn delete(&self, key_id: &str) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["auth", "api-keys", key_id]))
            .await
    }

    /// `POST /auth/api-keys/<id>/revoke`
    ///
    /// Revocation keeps the record for auditing; `delete` removes it.
    pub async fn revoke(&self, key_id: &str, revoke: &ApiKeyRevoke) -> Result<ApiKeyResponse, Error> {
        self.client
            .send_json(Request::post(["auth", "api-keys", key_id, "revoke"]).json(revoke)?)
            .await
    }
}
