// attachment.rs

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::info;

use crate::error::{GraphMailerError, Result};
use crate::graph::message::FileAttachment;

/// Reads the whole file into memory and wraps it as a Graph fileAttachment.
///
/// The MIME type is guessed from the extension and falls back to
/// `application/octet-stream`. No size limit is applied here.
pub fn build_attachment(file_path: &Path) -> Result<FileAttachment> {
    // only regular files can be attached
    if !file_path.is_file() {
        return Err(GraphMailerError::AttachmentNotFoundError(
            file_path.to_path_buf(),
        ));
    }

    // "/reports/output.xlsx" -> "output.xlsx"
    let file_name = match file_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            return Err(GraphMailerError::AttachmentNotFoundError(
                file_path.to_path_buf(),
            ))
        }
    };
    let mime_type = mime_guess::from_path(file_path)
        .first_or_octet_stream()
        .to_string();

    // read and encode the content
    let content = fs::read(file_path)?;
    let encoded = BASE64.encode(content);

    info!("Attachment ready: {file_name} ({mime_type})");
    Ok(FileAttachment::new(file_name, mime_type, encoded))
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
