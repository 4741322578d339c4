//! REST client for the backend service's auto-generated table API

use axum::body::Bytes;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::auth::AuthClient;
use super::error::SupabaseError;

/// Ask the service to return the affected rows from a mutation
const PREFER_REPRESENTATION: &str = "return=representation";

/// Backend service client
///
/// Holds one pooled HTTP client; cheap to clone.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, SupabaseError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a query against one table
    pub fn from(&self, table: &str) -> RestQuery<'_> {
        RestQuery {
            client: self,
            table: table.to_string(),
            filters: Vec::new(),
        }
    }

    /// Auth API (sign-up, password sign-in)
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }

    pub(super) fn http(&self) -> &Client {
        &self.http
    }

    /// Attach service credentials (`apikey` header + bearer token)
    pub(super) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

/// Filtered request against `/rest/v1/<table>`
///
/// Every filter is a `column=<op>.<value>` query pair.
#[derive(Debug, Clone)]
pub struct RestQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    filters: Vec<(String, String)>,
}

impl RestQuery<'_> {
    /// Equality filter: `column=eq.value`
    pub fn eq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Case-insensitive pattern filter: `column=ilike.pattern` (`*` is the wildcard)
    pub fn ilike(mut self, column: &str, pattern: impl AsRef<str>) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.{}", pattern.as_ref())));
        self
    }

    /// Query pairs accumulated so far
    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// `GET` matching rows
    pub async fn select<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        tracing::debug!(table = %self.table, filters = ?self.filters, "REST select");
        let request = self.request(reqwest::Method::GET);
        let response = request.send().await?;
        let body = success_body(response).await?;
        Ok(decode_rows(&body)?)
    }

    /// `POST` one row, returning the inserted representation
    ///
    /// The write has happened once the service answers 2xx, so a
    /// representation that does not decode yields no rows, not an error.
    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(table = %self.table, "REST insert");
        let request = self
            .request(reqwest::Method::POST)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(body);
        let response = request.send().await?;
        self.written_rows(response).await
    }

    /// `PATCH` matching rows with the given fields, returning the new representation
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(table = %self.table, filters = ?self.filters, "REST update");
        let request = self
            .request(reqwest::Method::PATCH)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(body);
        let response = request.send().await?;
        self.written_rows(response).await
    }

    /// `DELETE` matching rows
    pub async fn delete(self) -> Result<(), SupabaseError> {
        tracing::debug!(table = %self.table, filters = ?self.filters, "REST delete");
        let response = self.request(reqwest::Method::DELETE).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(SupabaseError::from_status(status, &body));
        }
        Ok(())
    }

    async fn written_rows<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Vec<T>, SupabaseError> {
        let body = success_body(response).await?;
        match decode_rows(&body) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                tracing::warn!(
                    table = %self.table,
                    error = %e,
                    "Write accepted but returned rows did not decode"
                );
                Ok(Vec::new())
            }
        }
    }

    fn request(&self, method: reqwest::Method) -> RequestBuilder {
        let request = self
            .client
            .http()
            .request(method, self.client.rest_url(&self.table))
            .query(&self.filters);
        self.client.authorize(request)
    }
}

async fn success_body(response: Response) -> Result<Bytes, SupabaseError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(SupabaseError::from_status(status, &body));
    }
    Ok(body)
}

/// Decode a row list, treating an empty body as no rows
fn decode_rows<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(body)
}
