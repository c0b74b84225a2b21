// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::compose::MessageTemplate;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::MailBlastResult;
use crate::modules::smtp::util::generate_message_id;
use crate::raise_error;
use mail_send::mail_builder::{mime::BodyPart, MessageBuilder};
use mail_send::smtp::message::{IntoMessage, Message};
use mime_guess::{mime, Mime};
use std::borrow::Cow;
use std::path::Path;

/// The single optional file shared by every message in a send pass.
///
/// The shell reads it from disk exactly once; each outgoing message embeds a
/// copy of the bytes under the original file name.
pub struct Attachment {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn load(path: &Path) -> MailBlastResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                raise_error!(
                    format!("Invalid attachment path: {}", path.display()),
                    ErrorCode::AttachmentError
                )
            })?;
        let content = std::fs::read(path).map_err(|e| {
            raise_error!(
                format!("Failed to read attachment '{}': {}", path.display(), e),
                ErrorCode::AttachmentError
            )
        })?;
        Ok(Self { file_name, content })
    }

    pub fn mime_type(&self) -> Mime {
        mime_guess::from_path(&self.file_name).first_or_octet_stream()
    }

    fn body_part(&self) -> MailBlastResult<BodyPart<'static>> {
        let mime = self.mime_type();
        if mime.type_() == mime::TEXT {
            let text = String::from_utf8(self.content.clone()).map_err(|e| {
                raise_error!(
                    format!("Invalid UTF-8 in text content: {}", e),
                    ErrorCode::AttachmentError
                )
            })?;
            Ok(BodyPart::Text(Cow::Owned(text)))
        } else {
            Ok(BodyPart::Binary(Cow::Owned(self.content.clone())))
        }
    }
}

/// Assembles one per-recipient message: sender, single recipient, the shared
/// subject and plain-text body, and the optional attachment.
pub fn build_outgoing(
    sender: &str,
    recipient: &str,
    template: &MessageTemplate,
    attachment: Option<&Attachment>,
) -> MailBlastResult<Message<'static>> {
    let mut builder = MessageBuilder::new()
        .from(sender.to_string())
        .to(recipient.to_string())
        .subject(template.subject.clone())
        .message_id(generate_message_id())
        .text_body(template.body.clone());

    if let Some(attachment) = attachment {
        let content = attachment
            .body_part()
            .map_err(|e| raise_error!(format!("Attachment error: {}", e), ErrorCode::AttachmentError))?;
        builder = builder.attachment(
            attachment.mime_type().to_string(),
            attachment.file_name.clone(),
            content,
        );
    }

    builder.into_message().map_err(|e| {
        raise_error!(
            format!("Failed to build message: {}", e),
            ErrorCode::InternalError
        )
    })
}
