// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Encryption {
    /// SSL/TLS encrypted connection
    Ssl,
    /// StartTLS encryption
    #[default]
    StartTls,
    /// Unencrypted connection
    None,
}

/// Built-in relay presets. Adding a preset means adding a variant and its
/// `server()` mapping; the engine and session manager stay untouched.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum RelayPreset {
    /// Microsoft 365 submission endpoint. Accounts with 2FA need an app password.
    Outlook,
    /// Brevo SMTP relay. Authenticate with a Brevo-verified sender and SMTP key.
    Brevo,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayServer {
    pub host: &'static str,
    pub port: u16,
    pub encryption: Encryption,
}

impl RelayPreset {
    pub fn server(&self) -> RelayServer {
        match self {
            RelayPreset::Outlook => RelayServer {
                host: "smtp.office365.com",
                port: 587,
                encryption: Encryption::StartTls,
            },
            RelayPreset::Brevo => RelayServer {
                host: "smtp-relay.brevo.com",
                port: 587,
                encryption: Encryption::StartTls,
            },
        }
    }
}
