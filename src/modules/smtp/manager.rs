// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::code::ErrorCode;
use crate::modules::error::{MailBlastError, MailBlastResult};
use crate::modules::smtp::client::MailBlastSmtpClient;
use crate::modules::smtp::relay::{Encryption, RelayPreset};
use crate::raise_error;
use mail_send::{Credentials, SmtpClientBuilder};
use std::time::Duration;

pub struct SmtpSessionManager {
    relay: RelayPreset,
}

impl SmtpSessionManager {
    pub fn new(relay: RelayPreset) -> Self {
        Self { relay }
    }

    /// Opens one authenticated session against the preset's relay. Login
    /// happens during connect, so a rejected credential surfaces here and
    /// never reaches the send loop.
    pub async fn connect(
        &self,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> MailBlastResult<MailBlastSmtpClient> {
        let server = self.relay.server();
        let credentials = Credentials::new(username.to_string(), password.to_string());

        let builder = SmtpClientBuilder::new(server.host.to_string(), server.port)
            .credentials(credentials)
            .timeout(timeout);

        let client = match server.encryption {
            Encryption::Ssl => {
                let client = builder
                    .implicit_tls(true)
                    .connect()
                    .await
                    .map_err(map_connect_error)?;
                MailBlastSmtpClient::Tls(client)
            }
            Encryption::StartTls => {
                let client = builder
                    .implicit_tls(false)
                    .connect()
                    .await
                    .map_err(map_connect_error)?;
                MailBlastSmtpClient::Tls(client)
            }
            Encryption::None => {
                let client = builder
                    .connect_plain()
                    .await
                    .map_err(map_connect_error)?;
                MailBlastSmtpClient::Plain(client)
            }
        };

        Ok(client)
    }
}

fn map_connect_error(error: mail_send::Error) -> MailBlastError {
    match &error {
        mail_send::Error::AuthenticationFailed(_) => raise_error!(
            format!("SMTP login failed: {:#}", error),
            ErrorCode::SmtpAuthenticationFailed
        ),
        _ => raise_error!(format!("{:#}", error), ErrorCode::SmtpConnectionFailed),
    }
}
