// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::MailBlastResult;

pub mod generated;

/// Subject and body shared by every recipient in one send pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageTemplate {
    pub subject: String,
    pub body: String,
}

/// Produces the message template for a send pass.
///
/// Two implementations share this interface, so nothing downstream branches on
/// how the body came to be: `ManualComposer` passes typed text through, and
/// `generated::GeneratedComposer` asks a chat-completion endpoint once.
pub(crate) trait Composer {
    async fn compose(&self) -> MailBlastResult<MessageTemplate>;
}

pub struct ManualComposer {
    subject: String,
    body: String,
}

impl ManualComposer {
    pub fn new(subject: String, body: String) -> Self {
        Self { subject, body }
    }
}

impl Composer for ManualComposer {
    async fn compose(&self) -> MailBlastResult<MessageTemplate> {
        Ok(MessageTemplate {
            subject: self.subject.clone(),
            body: self.body.clone(),
        })
    }
}
