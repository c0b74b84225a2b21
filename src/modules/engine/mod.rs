// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::compose::MessageTemplate;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::MailBlastResult;
use crate::modules::recipients::RecipientRow;
use crate::modules::smtp::client::Sender;
use crate::modules::smtp::message::{build_outgoing, Attachment};
use crate::{raise_error, validate_email};
use tracing::{info, warn};

/// One recipient the transport rejected, or that never reached the transport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailedRecipient {
    pub address: String,
    pub reason: String,
}

/// The outcome partition of one send pass. Every input row lands in exactly
/// one of the two lists, in row order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SendReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<FailedRecipient>,
}

/// Refuses a pass whose template is unusable. Callers check this before
/// opening a transport session; the pass itself checks it again before
/// touching the session it was handed.
pub fn ensure_sendable(template: &MessageTemplate) -> MailBlastResult<()> {
    if template.subject.trim().is_empty() || template.body.trim().is_empty() {
        return Err(raise_error!(
            "Please provide both subject and body.".into(),
            ErrorCode::MissingConfiguration
        ));
    }
    Ok(())
}

/// Runs one send pass: per row, validate the address, build the message,
/// submit it, and record the outcome. A per-recipient failure never aborts
/// the remaining rows; only the returned partition reports it.
pub async fn run_send_pass<S: Sender>(
    rows: &[RecipientRow],
    template: &MessageTemplate,
    attachment: Option<&Attachment>,
    sender_address: &str,
    session: &mut S,
) -> MailBlastResult<SendReport> {
    ensure_sendable(template)?;

    info!("Starting send pass over {} recipients", rows.len());
    let mut report = SendReport::default();

    for row in rows {
        let address = row.email.trim().to_string();

        if validate_email!(&address).is_err() {
            warn!("Skipping invalid recipient address: '{}'", address);
            report.failed.push(FailedRecipient {
                address,
                reason: "Invalid email address".to_string(),
            });
            continue;
        }

        let message = match build_outgoing(sender_address, &address, template, attachment) {
            Ok(message) => message,
            Err(error) => {
                warn!("Could not build message for '{}': {}", address, error);
                report.failed.push(FailedRecipient {
                    address,
                    reason: error.to_string(),
                });
                continue;
            }
        };

        match session.send_message(message).await {
            Ok(()) => report.succeeded.push(address),
            Err(error) => {
                warn!("Delivery to '{}' failed: {}", address, error);
                report.failed.push(FailedRecipient {
                    address,
                    reason: error.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mail_send::smtp::message::IntoMessage;
    use std::collections::HashMap;

    /// Deterministic in-memory transport: records every submission and fails
    /// the addresses it was told to fail.
    #[derive(Default)]
    struct StubSender {
        attempts: Vec<String>,
        failures: HashMap<String, String>,
    }

    impl StubSender {
        fn failing(address: &str, reason: &str) -> Self {
            let mut failures = HashMap::new();
            failures.insert(address.to_string(), reason.to_string());
            Self {
                attempts: Vec::new(),
                failures,
            }
        }
    }

    impl Sender for StubSender {
        async fn send_message<'x>(
            &mut self,
            message: impl IntoMessage<'x>,
        ) -> MailBlastResult<()> {
            let message = message
                .into_message()
                .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::InternalError))?;
            let recipient = message
                .rcpt_to
                .first()
                .map(|addr| addr.email.to_string())
                .unwrap_or_default();
            self.attempts.push(recipient.clone());
            match self.failures.get(&recipient) {
                Some(reason) => Err(raise_error!(
                    reason.clone(),
                    ErrorCode::SmtpCommandFailed
                )),
                None => Ok(()),
            }
        }

        async fn quit(self) -> MailBlastResult<()> {
            Ok(())
        }
    }

    fn rows(addresses: &[&str]) -> Vec<RecipientRow> {
        addresses
            .iter()
            .map(|address| RecipientRow {
                email: address.to_string(),
            })
            .collect()
    }

    fn template() -> MessageTemplate {
        MessageTemplate {
            subject: "Your Marketing Email".to_string(),
            body: "Hello,\n\nThis is a test marketing email.".to_string(),
        }
    }

    #[tokio::test]
    async fn every_row_lands_in_exactly_one_partition() {
        let rows = rows(&["a@x.com", "b@x.com", "bad", "c@x.com", ""]);
        let mut session = StubSender::default();
        let report = run_send_pass(&rows, &template(), None, "sender@example.com", &mut session)
            .await
            .unwrap();
        assert_eq!(report.succeeded.len() + report.failed.len(), rows.len());
    }

    #[tokio::test]
    async fn invalid_address_never_reaches_the_transport() {
        let rows = rows(&["bad", ""]);
        let mut session = StubSender::default();
        let report = run_send_pass(&rows, &template(), None, "sender@example.com", &mut session)
            .await
            .unwrap();
        assert!(session.attempts.is_empty());
        assert_eq!(report.succeeded, Vec::<String>::new());
        assert_eq!(
            report.failed,
            vec![
                FailedRecipient {
                    address: "bad".to_string(),
                    reason: "Invalid email address".to_string(),
                },
                FailedRecipient {
                    address: "".to_string(),
                    reason: "Invalid email address".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn addresses_are_trimmed_before_validation() {
        let rows = rows(&["  a@x.com  "]);
        let mut session = StubSender::default();
        let report = run_send_pass(&rows, &template(), None, "sender@example.com", &mut session)
            .await
            .unwrap();
        assert_eq!(report.succeeded, vec!["a@x.com".to_string()]);
        assert_eq!(session.attempts, vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn transport_failure_does_not_abort_the_pass() {
        let rows = rows(&["a@x.com", "bad", "c@x.com"]);
        let mut session = StubSender::failing("c@x.com", "mailbox full");
        let report = run_send_pass(&rows, &template(), None, "sender@example.com", &mut session)
            .await
            .unwrap();
        assert_eq!(report.succeeded, vec!["a@x.com".to_string()]);
        assert_eq!(
            report.failed,
            vec![
                FailedRecipient {
                    address: "bad".to_string(),
                    reason: "Invalid email address".to_string(),
                },
                FailedRecipient {
                    address: "c@x.com".to_string(),
                    reason: "mailbox full".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn missing_subject_or_body_refuses_the_pass() {
        let rows = rows(&["a@x.com"]);
        for template in [
            MessageTemplate {
                subject: String::new(),
                body: "body".to_string(),
            },
            MessageTemplate {
                subject: "subject".to_string(),
                body: "   ".to_string(),
            },
        ] {
            let mut session = StubSender::default();
            let error =
                run_send_pass(&rows, &template, None, "sender@example.com", &mut session)
                    .await
                    .unwrap_err();
            assert_eq!(error.code(), ErrorCode::MissingConfiguration);
            assert!(session.attempts.is_empty());
        }
    }

    #[tokio::test]
    async fn attachment_error_is_recorded_and_pass_continues() {
        let rows = rows(&["a@x.com", "b@x.com"]);
        let attachment = Attachment {
            file_name: "notes.txt".to_string(),
            content: vec![0xff, 0xfe],
        };
        let mut session = StubSender::default();
        let report = run_send_pass(
            &rows,
            &template(),
            Some(&attachment),
            "sender@example.com",
            &mut session,
        )
        .await
        .unwrap();
        assert!(session.attempts.is_empty());
        assert_eq!(report.failed.len(), 2);
        for failed in &report.failed {
            assert!(failed.reason.starts_with("Attachment error:"));
        }
    }

    #[tokio::test]
    async fn binary_attachment_rides_along_without_failures() {
        let rows = rows(&["a@x.com"]);
        let attachment = Attachment {
            file_name: "report.pdf".to_string(),
            content: b"%PDF-1.4 fake".to_vec(),
        };
        let mut session = StubSender::default();
        let report = run_send_pass(
            &rows,
            &template(),
            Some(&attachment),
            "sender@example.com",
            &mut session,
        )
        .await
        .unwrap();
        assert_eq!(report.succeeded, vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn empty_table_is_a_trivial_success() {
        let mut session = StubSender::default();
        let report = run_send_pass(&[], &template(), None, "sender@example.com", &mut session)
            .await
            .unwrap();
        assert_eq!(report, SendReport::default());
    }

    #[tokio::test]
    async fn identical_inputs_yield_identical_partitions() {
        let rows = rows(&["a@x.com", "bad", "c@x.com"]);
        let mut first_session = StubSender::failing("c@x.com", "mailbox full");
        let first =
            run_send_pass(&rows, &template(), None, "sender@example.com", &mut first_session)
                .await
                .unwrap();
        let mut second_session = StubSender::failing("c@x.com", "mailbox full");
        let second =
            run_send_pass(&rows, &template(), None, "sender@example.com", &mut second_session)
                .await
                .unwrap();
        assert_eq!(first, second);
        assert_eq!(first_session.attempts, second_session.attempts);
    }
}
