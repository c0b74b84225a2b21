// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::smtp::relay::RelayPreset;
use clap::Parser;
use std::{path::PathBuf, sync::LazyLock};

#[cfg(not(test))]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::parse);

#[cfg(test)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new_for_test);

#[derive(Debug, Parser)]
#[clap(
    name = "mailblast",
    about = "A bulk email sender that reads a recipient table, composes a message
    by hand or via a text-generation API, and submits it to every recipient over SMTP.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Settings {
    /// mailblast log level (default: "info")
    #[clap(
        long,
        default_value = "info",
        env,
        help = "Set the log level for mailblast"
    )]
    pub mailblast_log_level: String,

    #[clap(
        long,
        default_value = "true",
        env,
        help = "Enable ANSI colors in log output"
    )]
    pub mailblast_ansi_logs: bool,

    /// Recipient table: a CSV or TSV file with an "Email" column.
    #[clap(
        long,
        env,
        help = "Path to the recipient table (CSV/TSV with an 'Email' column)"
    )]
    pub mailblast_recipient_file: PathBuf,

    /// Subject line shared by every message in the pass.
    #[clap(
        long,
        default_value = "Your Marketing Email",
        env,
        help = "Set the subject line for the send pass"
    )]
    pub mailblast_subject: String,

    /// Manually typed message body. Mutually exclusive with --mailblast-prompt.
    #[clap(long, env, help = "Set the plain-text message body")]
    pub mailblast_body: Option<String>,

    /// Campaign description handed to the text-generation API; its response
    /// becomes the message body verbatim.
    #[clap(
        long,
        env,
        conflicts_with = "mailblast_body",
        help = "Generate the message body from this prompt instead of typing it"
    )]
    pub mailblast_prompt: Option<String>,

    #[clap(
        long,
        env = "OPENAI_API_KEY",
        help = "API key for the text-generation endpoint"
    )]
    pub mailblast_openai_api_key: Option<String>,

    #[clap(
        long,
        default_value = "gpt-3.5-turbo",
        env,
        help = "Model name for the text-generation endpoint"
    )]
    pub mailblast_openai_model: String,

    #[clap(
        long,
        default_value = "https://api.openai.com/v1",
        env,
        help = "Base URL of the text-generation endpoint"
    )]
    pub mailblast_openai_base_url: String,

    /// Optional single file attached to every message in the pass.
    #[clap(long, env, help = "Path to a file to attach to every message")]
    pub mailblast_attachment: Option<PathBuf>,

    /// Mail relay preset. Both built-in presets submit on port 587 with STARTTLS.
    #[clap(
        long,
        value_enum,
        default_value = "brevo",
        env,
        help = "Select the mail relay preset (outlook or brevo)"
    )]
    pub mailblast_relay: RelayPreset,

    #[clap(long, env, help = "Sender email address used for every message")]
    pub mailblast_sender_email: String,

    #[clap(
        long,
        env,
        hide_env_values = true,
        help = "SMTP password or relay SMTP key for the sender account"
    )]
    pub mailblast_smtp_password: String,

    #[clap(
        long,
        default_value = "60",
        env,
        help = "Timeout in seconds for SMTP connect and submission"
    )]
    pub mailblast_smtp_timeout_seconds: u64,

    /// Directory receiving success.csv and failed.csv after the pass.
    #[clap(
        long,
        default_value = ".",
        env,
        help = "Set the output directory for the result files"
    )]
    pub mailblast_output_dir: PathBuf,
}

impl Settings {
    #[cfg(test)]
    fn new_for_test() -> Self {
        Self {
            mailblast_log_level: "info".to_string(),
            mailblast_ansi_logs: false,
            mailblast_recipient_file: "recipients.csv".into(),
            mailblast_subject: "Your Marketing Email".to_string(),
            mailblast_body: Some("Hello,\n\nThis is a test marketing email.".to_string()),
            mailblast_prompt: None,
            mailblast_openai_api_key: None,
            mailblast_openai_model: "gpt-3.5-turbo".to_string(),
            mailblast_openai_base_url: "https://api.openai.com/v1".to_string(),
            mailblast_attachment: None,
            mailblast_relay: RelayPreset::Brevo,
            mailblast_sender_email: "sender@example.com".to_string(),
            mailblast_smtp_password: "change-me".to_string(),
            mailblast_smtp_timeout_seconds: 60,
            mailblast_output_dir: ".".into(),
        }
    }
}
