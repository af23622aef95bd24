//! v5 (Kraken) API surface
//!
//! The legacy surface: limit/offset collections keyed by resource name
//! instead of cursor envelopes, plus the mutating community operations.
//! Operations marked as requiring an OAuth token check that precondition
//! explicitly before any request is built.

mod communities;
mod search;
mod teams;

pub use communities::{Communities, UpdateCommunityRequest};
pub use search::Search;
pub use teams::Teams;

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::query::Query;
use crate::types::BASE_URL;
use serde_json::Value;
use std::time::Duration;

/// Client for the v5 API
#[derive(Debug, Clone)]
pub struct TwitchClient {
    http: HttpClient,
    credentials: Credentials,
}

impl TwitchClient {
    /// Create a client against the default endpoint
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Create a client builder
    pub fn builder(credentials: Credentials) -> TwitchClientBuilder {
        TwitchClientBuilder {
            credentials,
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// The credentials this client was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Community operations
    pub fn communities(&self) -> Communities<'_> {
        Communities { client: self }
    }

    /// Search operations
    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    /// Team operations
    pub fn teams(&self) -> Teams<'_> {
        Teams { client: self }
    }

    /// Precondition for token-gated operations; checked before any request.
    fn require_token(&self) -> Result<()> {
        if self.credentials.oauth_token.is_none() {
            return Err(Error::auth("OAuth token required"));
        }
        Ok(())
    }

    async fn request_get(&self, query: &Query) -> Result<Value> {
        self.http.get_json(query.path(), query.pairs()).await
    }

    async fn request_put(&self, path: &str, body: Option<Value>) -> Result<()> {
        self.http.put(path, body).await?;
        Ok(())
    }

    async fn request_post(&self, path: &str, body: Option<Value>) -> Result<()> {
        self.http.post(path, body).await?;
        Ok(())
    }

    async fn request_delete(&self, path: &str) -> Result<()> {
        self.http.delete(path).await?;
        Ok(())
    }
}

/// Builder for [`TwitchClient`]
pub struct TwitchClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
}

impl TwitchClientBuilder {
    /// Override the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> TwitchClient {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(self.timeout)
            .header("Accept", "application/vnd.twitchtv.v5+json")
            .header("Client-ID", self.credentials.client_id.clone());
        if let Some(token) = &self.credentials.oauth_token {
            builder = builder.header("Authorization", format!("OAuth {token}"));
        }

        TwitchClient {
            http: HttpClient::with_config(builder.build()),
            credentials: self.credentials,
        }
    }
}

#[cfg(test)]
mod tests;
