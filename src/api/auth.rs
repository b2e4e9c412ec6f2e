use crate::Error;
use crate::transport::request::Request;
use crate::types::{LoginOptions, TokenResponse, UserCreate, UserResponse};

/// Registration, login and session lifecycle.
///
/// `login` and `refresh` store the returned token pair on the shared client,
/// so every service handed out by the same [`crate::Client`] picks the new
/// credentials up immediately.
#[derive(Clone)]
pub struct AuthService {
    client: crate::Client,
}

impl AuthService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl AuthService {
    /// `POST /auth/register`
    pub async fn register(&self, user: &UserCreate) -> Result<UserResponse, Error> {
        self.client
            .send_json(Request::post(["auth", "register"]).json(user)?)
            .await
    }

    /// `POST /auth/login` (form-encoded password grant).
    ///
    /// On success the returned token pair is stored on the client.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<TokenResponse, Error> {
        self.login_with_options(username, password, &LoginOptions::default())
            .await
    }

    /// `POST /auth/login` with explicit OAuth2 password-grant extras.
    pub async fn login_with_options(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        options: &LoginOptions,
    ) -> Result<TokenResponse, Error> {
        let mut pairs = vec![
            ("username".to_owned(), username.into()),
            ("password".to_owned(), password.into()),
        ];
        if let Some(grant_type) = &options.grant_type {
            pairs.push(("grant_type".to_owned(), grant_type.clone()));
        }
        if let Some(scope) = &options.scope {
            pairs.push(("scope".to_owned(), scope.clone()));
        }
        if let Some(client_id) = &options.client_id {
            pairs.push(("client_id".to_owned(), client_id.clone()));
        }
        if let Some(client_secret) = &options.client_secret {
            pairs.push(("client_secret".to_owned(), client_secret.clone()));
        }

        let tokens: TokenResponse = self
            .client
            .send_json(Request::post(["auth", "login"]).form_pairs(pairs))
            .await?;
        self.client
            .store_tokens(tokens.access_token.clone(), tokens.refresh_token.clone());
        Ok(tokens)
    }

    /// `POST /auth/refresh` with the stored refresh token.
    ///
    /// Explicit counterpart of the automatic refresh-on-401: rotates and
    /// stores both tokens on success.
    pub async fn refresh(&self) -> Result<TokenResponse, Error> {
        let refresh = self
            .client
            .refresh_token()
            .ok_or_else(|| Error::auth("no refresh token available"))?;

        let tokens: TokenResponse = self
            .client
            .send_json(
                Request::post(["auth", "refresh"])
                    .json(&serde_json::json!({ "refresh_token": refresh }))?,
            )
            .await?;
        self.client
            .store_tokens(tokens.access_token.clone(), tokens.refresh_token.clone());
        Ok(tokens)
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<UserResponse, Error> {
        self.client.send_json(Request::get(["auth", "me"])).await
    }

    /// `POST /auth/logout`
    ///
    /// The stored token pair is cleared whether or not the server call
    /// succeeds; a dead session is not worth keeping credentials for.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self
            .client
            .send_unit(Request::post(["auth", "logout"]))
            .await;
        self.client.clear_tokens();
        result
    }
}
