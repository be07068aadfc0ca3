// token.rs

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{GraphMailerError, Result};
use crate::graph::credentials::Credentials;
use crate::graph::join_segments;

pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";
pub const DEFAULT_TOKEN_TIMEOUT_SECONDS: u64 = 30;

/// An opaque bearer token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(<{} bytes>)", self.0.len())
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Either half of what the token endpoint sends back.
#[derive(Debug, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// An application identity able to run the client-credentials grant.
pub struct ConfidentialClient {
    client_id: String,
    client_secret: String,
    authority: Url,
    timeout: Duration,
    http: Client,
}

impl ConfidentialClient {
    pub fn new(http: Client, credentials: &Credentials, authority_host: &str) -> Result<Self> {
        let authority = join_segments(authority_host, &[credentials.tenant_id.as_str()])?;
        Ok(Self {
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
            authority,
            timeout: Duration::from_secs(DEFAULT_TOKEN_TIMEOUT_SECONDS),
            http,
        })
    }

    /// Bounds the token round trip.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn authority(&self) -> &str {
        self.authority.as_str()
    }

    pub fn token_endpoint(&self) -> Result<Url> {
        join_segments(self.authority.as_str(), &["oauth2", "v2.0", "token"])
    }

    /// Exchanges the application credentials for a token. One round trip,
    /// no retries.
    pub async fn acquire_token_for_client(&self, scopes: &[&str]) -> Result<AccessToken> {
        let url = self.token_endpoint()?;
        let scope = scopes.join(" ");
        debug!("Requesting token from {url} for scope '{scope}'");

        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", scope.as_str()),
            ("grant_type", CLIENT_CREDENTIALS_GRANT),
        ];
        let response = self
            .http
            .post(url)
            .timeout(self.timeout)
            .form(&form)
            .send()
            .await?;

        // the error document arrives with a 4xx status, so read the body either way
        let status = response.status();
        let text = response.text().await?;
        let token = parse_token_response(status, &text)?;
        info!("Access token acquired.");
        Ok(token)
    }
}

/// Classifies the token endpoint's reply. A reply without `access_token` is an
/// authentication failure carrying the provider's own error text, or the
/// status and raw body when the provider gave none.
pub fn parse_token_response(status: StatusCode, text: &str) -> Result<AccessToken> {
    let unrecognized = || GraphMailerError::AuthenticationError {
        error: status.to_string(),
        description: text.to_string(),
    };

    let response: TokenResponse = match serde_json::from_str(text) {
        Ok(response) => response,
        Err(_) => return Err(unrecognized()),
    };

    match response {
        TokenResponse {
            access_token: Some(token),
            ..
        } => Ok(AccessToken::new(token)),
        TokenResponse {
            error: None,
            error_description: None,
            ..
        } => Err(unrecognized()),
        TokenResponse {
            error,
            error_description,
            ..
        } => Err(GraphMailerError::AuthenticationError {
            error: error.unwrap_or_default(),
            description: error_description.unwrap_or_default(),
        }),
    }
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
