// credentials.rs

use std::env;
use std::fmt;

use crate::error::{GraphMailerError, Result};

pub const CLIENT_ID_VAR: &str = "GRAPH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "GRAPH_CLIENT_SECRET";
pub const TENANT_ID_VAR: &str = "GRAPH_TENANT_ID";

/// The identity of the registered application.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            tenant_id: tenant_id.into(),
        }
    }

    /// Reads the identity from the process environment. Unset variables
    /// become empty strings; `validate_credentials` reports them.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var(CLIENT_ID_VAR).unwrap_or_default(),
            client_secret: env::var(CLIENT_SECRET_VAR).unwrap_or_default(),
            tenant_id: env::var(TENANT_ID_VAR).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

/// Fails fast, naming every missing identity variable, before any network call.
pub fn validate_credentials(credentials: &Credentials) -> Result<()> {
    let missing: Vec<&str> = [
        (CLIENT_ID_VAR, &credentials.client_id),
        (CLIENT_SECRET_VAR, &credentials.client_secret),
        (TENANT_ID_VAR, &credentials.tenant_id),
    ]
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| *name)
    .collect();

    if !missing.is_empty() {
        return Err(GraphMailerError::ConfigurationError(format!(
            "Missing required environment variable(s): {}. \
             Set them in your shell or a .env file before running.",
            missing.join(", ")
        )));
    }

    Ok(())
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_message(credentials: &Credentials) -> String {
        match validate_credentials(credentials) {
            Err(GraphMailerError::ConfigurationError(msg)) => msg,
            other => panic!("expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_credentials_pass() {
        let credentials = Credentials::new("client", "secret", "tenant");
        assert!(validate_credentials(&credentials).is_ok());
    }

    #[test]
    fn test_every_missing_field_is_named() {
        let msg = missing_message(&Credentials::default());
        assert!(msg.contains("GRAPH_CLIENT_ID, GRAPH_CLIENT_SECRET, GRAPH_TENANT_ID"));
    }

    #[test]
    fn test_each_single_missing_field_is_named() {
        let cases = [
            (Credentials::new("", "secret", "tenant"), CLIENT_ID_VAR),
            (Credentials::new("client", "", "tenant"), CLIENT_SECRET_VAR),
            (Credentials::new("client", "secret", ""), TENANT_ID_VAR),
        ];
        for (credentials, name) in cases {
            let msg = missing_message(&credentials);
            assert!(msg.contains(name), "{msg} should name {name}");
            for other in [CLIENT_ID_VAR, CLIENT_SECRET_VAR, TENANT_ID_VAR] {
                if other != name {
                    assert!(!msg.contains(other), "{msg} should not name {other}");
                }
            }
        }
    }

    #[test]
    fn test_two_missing_fields_are_both_named() {
        let msg = missing_message(&Credentials::new("client", "  ", ""));
        assert!(msg.contains("GRAPH_CLIENT_SECRET, GRAPH_TENANT_ID"));
        assert!(!msg.contains(CLIENT_ID_VAR));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("client", "hunter2", "tenant");
        let text = format!("{credentials:?}");
        assert!(text.contains("client"));
        assert!(!text.contains("hunter2"));
    }
}
