// config.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lettre::Address;
use serde::Deserialize;

use crate::error::{GraphMailerError, Result};
use crate::graph::message::{BodyType, Recipients};

pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";
pub const DEFAULT_GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";
pub const DEFAULT_SEND_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_TOKEN_TIMEOUT_SECONDS: u64 = 30;

//
// graph_mailer.toml
//

#[derive(Clone, Debug, Deserialize)]
pub struct GraphMailerConfiguration {
    #[serde(default)]
    pub graph: GraphConfig,
    pub mail: MailConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphConfig {
    /// Identity provider host; the tenant is appended to form the authority.
    #[serde(default = "default_authority_host")]
    pub authority_host: String,

    /// Root of the versioned Graph REST API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Scope requested in the client-credentials grant.
    #[serde(default = "default_scope")]
    pub scope: String,

    #[serde(default = "default_send_timeout_seconds")]
    pub send_timeout_seconds: u64,

    #[serde(default = "default_token_timeout_seconds")]
    pub token_timeout_seconds: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            authority_host: default_authority_host(),
            endpoint: default_endpoint(),
            scope: default_scope(),
            send_timeout_seconds: default_send_timeout_seconds(),
            token_timeout_seconds: default_token_timeout_seconds(),
        }
    }
}

fn default_authority_host() -> String {
    DEFAULT_AUTHORITY_HOST.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_GRAPH_ENDPOINT.to_string()
}

fn default_scope() -> String {
    DEFAULT_GRAPH_SCOPE.to_string()
}

fn default_send_timeout_seconds() -> u64 {
    DEFAULT_SEND_TIMEOUT_SECONDS
}

fn default_token_timeout_seconds() -> u64 {
    DEFAULT_TOKEN_TIMEOUT_SECONDS
}

fn default_save_to_sent_items() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct MailConfig {
    /// Mailbox the application sends from.
    pub sender: String,
    pub recipients: Recipients,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub body_type: BodyType,
    pub attachment_path: Option<PathBuf>,
    #[serde(default = "default_save_to_sent_items")]
    pub save_to_sent_items: bool,
}

impl MailConfig {
    /// Checks the addresses before anything goes over the wire.
    pub fn validate(&self) -> Result<()> {
        // we need somebody to send the report to
        if self.recipients.is_empty() {
            return Err(GraphMailerError::ConfigurationError(
                "At least one recipient address is required".to_string(),
            ));
        }
        // make sure the sender and all of the recipients look like e-mail addresses
        Address::from_str(&self.sender)?;
        for address in &self.recipients {
            Address::from_str(address)?;
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<GraphMailerConfiguration> {
    // read the TOML configuration file
    let config_text = fs::read_to_string(path).map_err(|e| {
        GraphMailerError::ConfigurationError(format!(
            "Failed to read configuration file '{}': {e}",
            path.display()
        ))
    })?;
    // deserialize the TOML into the configuration structure
    let config: GraphMailerConfiguration = toml::from_str(&config_text)?;
    Ok(config)
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_succeed() {
        assert!(true);
    }

    #[test]
    fn test_deserialize_graph_mailer_toml() -> Result<()> {
        let config_text = include_str!("../tests/data/test_graph_mailer.toml");
        let config: GraphMailerConfiguration = toml::from_str(config_text)?;

        assert_eq!("https://login.microsoftonline.com", config.graph.authority_host);
        assert_eq!("https://graph.microsoft.com/v1.0", config.graph.endpoint);
        assert_eq!(30, config.graph.send_timeout_seconds);
        assert_eq!(10, config.graph.token_timeout_seconds);

        let mail = &config.mail;
        assert_eq!("reports@yourdomain.com", mail.sender);
        assert_eq!(
            vec!["ops@yourdomain.com", "oncall@yourdomain.com", "ops@yourdomain.com"],
            mail.recipients.as_slice()
        );
        assert_eq!("Automated Report", mail.subject);
        assert_eq!(BodyType::Html, mail.body_type);
        assert_eq!(
            Some(PathBuf::from("/reports/output.xlsx")),
            mail.attachment_path
        );
        assert!(!mail.save_to_sent_items);
        mail.validate()?;
        Ok(())
    }

    #[test]
    fn test_deserialize_minimal_toml_uses_defaults() -> Result<()> {
        let config: GraphMailerConfiguration = toml::from_str(
            r#"
            [mail]
            sender = "reports@yourdomain.com"
            recipients = "recipient@yourdomain.com"
            subject = "Automated Report"
            body = "Please find the attached report."
            "#,
        )?;

        assert_eq!(DEFAULT_GRAPH_SCOPE, config.graph.scope);
        assert_eq!(DEFAULT_SEND_TIMEOUT_SECONDS, config.graph.send_timeout_seconds);
        assert_eq!(DEFAULT_TOKEN_TIMEOUT_SECONDS, config.graph.token_timeout_seconds);
        assert_eq!(vec!["recipient@yourdomain.com"], config.mail.recipients.as_slice());
        assert_eq!(BodyType::Text, config.mail.body_type);
        assert_eq!(None, config.mail.attachment_path);
        assert!(config.mail.save_to_sent_items);
        Ok(())
    }

    #[test]
    fn test_validate_rejects_empty_recipients() {
        let config: GraphMailerConfiguration = toml::from_str(
            r#"
            [mail]
            sender = "reports@yourdomain.com"
            recipients = []
            subject = "s"
            body = "b"
            "#,
        )
        .unwrap();

        match config.mail.validate() {
            Err(GraphMailerError::ConfigurationError(msg)) => {
                assert!(msg.contains("recipient"));
            }
            other => panic!("expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_malformed_address() {
        let config: GraphMailerConfiguration = toml::from_str(
            r#"
            [mail]
            sender = "reports@yourdomain.com"
            recipients = ["ops@yourdomain.com", "not-an-address"]
            subject = "s"
            body = "b"
            "#,
        )
        .unwrap();

        let result = config.mail.validate();
        assert!(matches!(result, Err(GraphMailerError::AddressError(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/does/not/exist/graph_mailer.toml"));
        assert!(matches!(result, Err(GraphMailerError::ConfigurationError(_))));
    }
}
