//! Credentials and token acquisition
//!
//! Credentials are injected explicitly at client construction; nothing here
//! reads configuration files or the environment. Token acquisition is a
//! single call against the OAuth token endpoint using the client-credentials
//! grant; there is no refresh or caching layer.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

/// Credentials identifying the calling application
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application client id, sent as the `Client-ID` header on every request
    pub client_id: String,
    /// OAuth token attached to requests when present
    pub oauth_token: Option<String>,
    /// Client secret, required only for token acquisition
    pub client_secret: Option<String>,
    /// Scopes requested during token acquisition
    pub scopes: Vec<String>,
}

impl Credentials {
    /// Create credentials from a client id alone
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            oauth_token: None,
            client_secret: None,
            scopes: Vec::new(),
        }
    }

    /// Attach an OAuth token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.oauth_token = Some(token.into());
        self
    }

    /// Attach a client secret
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Set the scopes requested during token acquisition
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Fetch an app access token via the client-credentials grant.
///
/// `token_url` is the absolute token endpoint URL. Requires both a client id
/// and a client secret; a failure reported by the remote endpoint surfaces
/// with the remote-provided message when one is present.
pub(crate) async fn fetch_app_access_token(
    http: &HttpClient,
    credentials: &Credentials,
    token_url: &str,
) -> Result<String> {
    let Some(client_secret) = credentials.client_secret.as_deref() else {
        return Err(Error::auth(
            "Client ID and Client Secret are not both present.",
        ));
    };
    if credentials.client_id.is_empty() {
        return Err(Error::auth(
            "Client ID and Client Secret are not both present.",
        ));
    }

    let mut query = vec![
        ("client_id".to_string(), credentials.client_id.clone()),
        ("client_secret".to_string(), client_secret.to_string()),
        ("grant_type".to_string(), "client_credentials".to_string()),
    ];
    if !credentials.scopes.is_empty() {
        query.push(("scope".to_string(), credentials.scopes.join(" ")));
    }

    let response = match http.send(Method::POST, token_url, &query, None).await {
        Ok(response) => response,
        Err(Error::HttpStatus { status, body }) => {
            let message = serde_json::from_str::<TokenResponse>(&body)
                .ok()
                .and_then(|t| t.message)
                .unwrap_or_else(|| format!("token endpoint returned HTTP {status}"));
            return Err(Error::auth(message));
        }
        Err(e) => return Err(e),
    };

    let token: TokenResponse = response.json().await.map_err(Error::Http)?;
    match token {
        TokenResponse {
            access_token: Some(access_token),
            ..
        } => {
            debug!("obtained app access token");
            Ok(access_token)
        }
        TokenResponse {
            message: Some(message),
            ..
        } => Err(Error::auth(message)),
        TokenResponse { .. } => Err(Error::auth("token endpoint returned no access token")),
    }
}
