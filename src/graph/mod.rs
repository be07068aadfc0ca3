// mod.rs

//! Microsoft Graph: the client-credentials grant and the sendMail call.

pub mod attachment;
pub mod credentials;
pub mod mail;
pub mod message;
pub mod token;

use reqwest::Url;

use crate::error::{GraphMailerError, Result};

/// Appends each segment to the path of `base`, percent-encoding as needed,
/// so an address like `a#b@d.com` stays one path segment.
pub fn join_segments(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| {
        GraphMailerError::ConfigurationError(format!("Invalid URL '{base}': {e}"))
    })?;
    url.path_segments_mut()
        .map_err(|_| {
            GraphMailerError::ConfigurationError(format!("URL '{base}' cannot take a path"))
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
