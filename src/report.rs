// report.rs

use std::time::Duration;

use reqwest::Client;
use tracing::{info, trace, warn};

use crate::context::Context;
use crate::error::Result;
use crate::graph::attachment::build_attachment;
use crate::graph::credentials::validate_credentials;
use crate::graph::mail::send_mail;
use crate::graph::message::build_payload;
use crate::graph::token::ConfidentialClient;

/// Graph rejects sendMail requests much past this; larger files belong in an upload session.
pub const LARGE_ATTACHMENT_WARN_BYTES: usize = 3 * 1024 * 1024;

/// Sends the configured report: validate, authenticate, [attach], build, submit.
pub async fn send_report(context: &Context) -> Result<()> {
    let graph = &context.config.graph;
    let mail = &context.config.mail;

    // fail fast; nothing touches the network until the configuration is sane
    validate_credentials(&context.credentials)?;
    mail.validate()?;

    // obtain a bearer token for the application
    let http = Client::new();
    let app = ConfidentialClient::new(http.clone(), &context.credentials, &graph.authority_host)?
        .with_timeout(Duration::from_secs(graph.token_timeout_seconds));
    trace!("Authority: {}", app.authority());
    let token = app.acquire_token_for_client(&[graph.scope.as_str()]).await?;

    // encode the attachment, if we have one
    let attachment = match &mail.attachment_path {
        Some(path) => {
            let attachment = build_attachment(path)?;
            let encoded_size = attachment.content_bytes.len();
            if encoded_size > LARGE_ATTACHMENT_WARN_BYTES {
                warn!(
                    "Attachment {} is {encoded_size} bytes encoded; Graph may reject the message",
                    attachment.name
                );
            }
            Some(attachment)
        }
        None => None,
    };

    // build the message and send it
    let payload = build_payload(
        &mail.subject,
        &mail.body,
        mail.body_type,
        &mail.recipients,
        attachment,
        mail.save_to_sent_items,
    );
    info!(
        "Sending '{}' from {} to {} recipient(s)",
        mail.subject,
        mail.sender,
        mail.recipients.len()
    );
    let timeout = Duration::from_secs(graph.send_timeout_seconds);
    send_mail(&http, &graph.endpoint, &mail.sender, &token, &payload, timeout).await
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
