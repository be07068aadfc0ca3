// error.rs

use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, GraphMailerError>;

#[derive(thiserror::Error, Debug)]
pub enum GraphMailerError {
    #[error("E-Mail Address error: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Attachment not found: {}", .0.display())]
    AttachmentNotFoundError(PathBuf),

    #[error("Authentication failed. Error: {error} - {description}")]
    AuthenticationError { error: String, description: String },

    #[error("{0}")]
    ConfigurationError(String),

    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Graph API returned {status}: {detail}")]
    SendFailedError { status: u16, detail: String },

    #[error("TOML Deserialization Error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GraphMailerError {
    /// The prefix used when the error is logged at the top level.
    pub fn category(&self) -> &'static str {
        match self {
            Self::AddressError(_) | Self::ConfigurationError(_) | Self::TomlError(_) => {
                "Configuration error"
            }
            Self::AttachmentNotFoundError(_) => "Attachment error",
            Self::AuthenticationError { .. } => "Authentication error",
            Self::SendFailedError { .. } => "Send failed",
            Self::HttpError(_) => "Network error",
            Self::IoError(_) => "I/O error",
            Self::JsonError(_) => "Serialization error",
        }
    }

    /// Every failure is terminal for the run.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
