// message.rs

use serde::{Deserialize, Serialize};

pub const FILE_ATTACHMENT_ODATA_TYPE: &str = "#microsoft.graph.fileAttachment";

//
// configuration-facing types
//

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub enum BodyType {
    #[default]
    #[serde(alias = "text")]
    Text,
    #[serde(rename = "HTML", alias = "Html", alias = "html")]
    Html,
}

/// A recipient value as written by a human: one address or many.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RecipientInput {
    One(String),
    Many(Vec<String>),
}

/// The ordered list of recipient addresses. Duplicates are kept.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "RecipientInput")]
pub struct Recipients(Vec<String>);

impl Recipients {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<RecipientInput> for Recipients {
    fn from(value: RecipientInput) -> Self {
        match value {
            RecipientInput::One(address) => Recipients(vec![address]),
            RecipientInput::Many(addresses) => Recipients(addresses),
        }
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        RecipientInput::One(value.to_string()).into()
    }
}

impl From<Vec<String>> for Recipients {
    fn from(value: Vec<String>) -> Self {
        RecipientInput::Many(value).into()
    }
}

impl<'a> IntoIterator for &'a Recipients {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//
// sendMail wire types
//

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    pub message: Message,
    pub save_to_sent_items: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub subject: String,
    pub body: ItemBody,
    pub to_recipients: Vec<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<FileAttachment>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub content_type: BodyType,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailAddress {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub name: String,
    pub content_type: String,
    /// Base64 (standard alphabet, padded) encoding of the file content.
    pub content_bytes: String,
}

impl FileAttachment {
    pub fn new(name: String, content_type: String, content_bytes: String) -> Self {
        Self {
            odata_type: FILE_ATTACHMENT_ODATA_TYPE.to_string(),
            name,
            content_type,
            content_bytes,
        }
    }
}

/// Assembles the sendMail request body. The attachment list is present only
/// when an attachment is supplied.
pub fn build_payload(
    subject: &str,
    body: &str,
    body_type: BodyType,
    recipients: &Recipients,
    attachment: Option<FileAttachment>,
    save_to_sent_items: bool,
) -> SendMailRequest {
    let to_recipients = recipients
        .into_iter()
        .map(|address| Recipient {
            email_address: EmailAddress {
                address: address.clone(),
            },
        })
        .collect();

    SendMailRequest {
        message: Message {
            subject: subject.to_string(),
            body: ItemBody {
                content_type: body_type,
                content: body.to_string(),
            },
            to_recipients,
            attachments: attachment.map(|a| vec![a]),
        },
        save_to_sent_items,
    }
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
