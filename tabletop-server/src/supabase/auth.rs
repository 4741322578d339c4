//! Auth API (`/auth/v1`)

use shared::models::{Credentials, Session};

use super::client::SupabaseClient;
use super::error::SupabaseError;

/// Borrowed view of the client scoped to the auth endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthClient<'a> {
    client: &'a SupabaseClient,
}

impl<'a> AuthClient<'a> {
    pub(super) fn new(client: &'a SupabaseClient) -> Self {
        Self { client }
    }

    /// Register a new user by email and password
    ///
    /// The created user (or confirmation-pending stub) is not needed by
    /// callers, so the body is only read for error reporting.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<(), SupabaseError> {
        tracing::debug!(email = %credentials.email, "auth sign-up");
        let url = format!("{}/auth/v1/signup", self.client.base_url());
        let request = self.client.http().post(url).json(credentials);
        let response = self.client.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(SupabaseError::from_status(status, &body));
        }
        Ok(())
    }

    /// Exchange email and password for a session
    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, SupabaseError> {
        tracing::debug!(email = %credentials.email, "auth password sign-in");
        let url = format!("{}/auth/v1/token", self.client.base_url());
        let request = self
            .client
            .http()
            .post(url)
            .query(&[("grant_type", "password")])
            .json(credentials);
        let response = self.client.authorize(request).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(SupabaseError::from_status(status, &body));
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
