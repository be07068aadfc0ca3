// mail.rs

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info};

use crate::error::{GraphMailerError, Result};
use crate::graph::message::SendMailRequest;
use crate::graph::join_segments;
use crate::graph::token::AccessToken;

pub fn send_mail_url(endpoint: &str, sender: &str) -> Result<Url> {
    join_segments(endpoint, &["users", sender, "sendMail"])
}

/// Submits the message on behalf of `sender`. Graph answers 202 Accepted and
/// delivers asynchronously; any other status is a failure.
pub async fn send_mail(
    http: &Client,
    endpoint: &str,
    sender: &str,
    token: &AccessToken,
    request: &SendMailRequest,
    timeout: Duration,
) -> Result<()> {
    let url = send_mail_url(endpoint, sender)?;
    let response = http
        .post(url)
        .bearer_auth(token.secret())
        .timeout(timeout)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::ACCEPTED {
        info!("Email sent successfully.");
        return Ok(());
    }

    // keep whatever Graph told us about the failure; an unreadable body still keeps the status
    let text = response.text().await.unwrap_or_default();
    let detail = describe_failure(&text);
    debug!("sendMail for {sender} returned {status}");
    Err(GraphMailerError::SendFailedError {
        status: status.as_u16(),
        detail,
    })
}

/// The structured error document when the body is JSON, otherwise the raw text.
pub fn describe_failure(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => value.to_string(),
        Err(_) => text.to_string(),
    }
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
