use crate::modules::error::code::ErrorCode;
use crate::modules::error::MailBlastResult;
use crate::raise_error;
use mail_send::smtp::message::IntoMessage;
use mail_send::SmtpClient;
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;

pub enum MailBlastSmtpClient {
    Plain(SmtpClient<TcpStream>),
    Tls(SmtpClient<TlsStream<TcpStream>>),
}

pub(crate) trait Sender {
    async fn send_message<'x>(&mut self, message: impl IntoMessage<'x>) -> MailBlastResult<()>;
    async fn quit(self) -> MailBlastResult<()>;
}

impl Sender for MailBlastSmtpClient {
    async fn send_message<'x>(&mut self, message: impl IntoMessage<'x>) -> MailBlastResult<()> {
        match self {
            MailBlastSmtpClient::Plain(smtp_client) => smtp_client
                .send(message)
                .await
                .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::SmtpCommandFailed)),
            MailBlastSmtpClient::Tls(smtp_client) => smtp_client
                .send(message)
                .await
                .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::SmtpCommandFailed)),
        }
    }

    async fn quit(self) -> MailBlastResult<()> {
        match self {
            MailBlastSmtpClient::Plain(smtp_client) => smtp_client
                .quit()
                .await
                .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::SmtpCommandFailed)),
            MailBlastSmtpClient::Tls(smtp_client) => smtp_client
                .quit()
                .await
                .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::SmtpCommandFailed)),
        }
    }
}
