use crate::Error;
use crate::transport::request::Request;
use crate::types::{UserResponse, UserUpdate};

/// Profile management for the authenticated user.
#[derive(Clone)]
pub struct UsersService {
    client: crate::Client,
}

impl UsersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl UsersService {
    /// `GET /users/me`
    pub async fn my_profile(&self) -> Result<UserResponse, Error> {
        self.client.send_json(Request::get(["users", "me"])).await
    }

    /// `PUT /users/me`
    pub async fn update_my_profile(&self, update: &UserUpdate) -> Result<UserResponse, Error> {
        self.client
            .send_json(Request::put(["users", "me"]).json(update)?)
            .await
    }

    /// `DELETE /users/me`
    ///
    /// Clears the stored token pair on success; the account no longer
    /// exists, so neither token can be used again.
    pub async fn delete_my_account(&self) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["users", "me"]))
            .await?;
        self.client.clear_tokens();
        Ok(())
    }
}
