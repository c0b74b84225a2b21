use modules::{
    compose::{generated::GeneratedComposer, Composer, ManualComposer, MessageTemplate},
    engine::{ensure_sendable, run_send_pass},
    error::{code::ErrorCode, MailBlastResult},
    logger,
    recipients::load_recipients,
    report,
    settings::cli::SETTINGS,
    smtp::{client::Sender, manager::SmtpSessionManager, message::Attachment},
};
use std::time::Duration;
use tracing::{debug, error, info};

mod modules;

static LOGO: &str = r#"
  __  __       _ _ ____  _           _
 |  \/  | __ _(_) | __ )| | __ _ ___| |_
 | |\/| |/ _` | | |  _ \| |/ _` / __| __|
 | |  | | (_| | | | |_) | | (_| \__ \ |_
 |_|  |_|\__,_|_|_|____/|_|\__,_|___/\__|

"#;

#[tokio::main]
async fn main() -> MailBlastResult<()> {
    logger::initialize_logging();
    info!("{}", LOGO);
    info!("Starting mailblast");
    info!("Version:  {}", mailblast_version!());

    if let Err(error) = run().await {
        eprintln!("{:?}", error);
        return Err(error);
    }
    Ok(())
}

async fn run() -> MailBlastResult<()> {
    initialize_tls()?;

    let rows = load_recipients(&SETTINGS.mailblast_recipient_file)?;
    info!(
        "Loaded {} recipients from '{}'",
        rows.len(),
        SETTINGS.mailblast_recipient_file.display()
    );

    let template = compose_template().await?;
    // Refuse an unusable template before the transport session is opened.
    ensure_sendable(&template)?;

    let attachment = match &SETTINGS.mailblast_attachment {
        Some(path) => {
            let attachment = Attachment::load(path)?;
            info!(
                "Attaching '{}' ({} bytes) to every message",
                attachment.file_name,
                attachment.content.len()
            );
            Some(attachment)
        }
        None => None,
    };

    let manager = SmtpSessionManager::new(SETTINGS.mailblast_relay);
    let timeout = Duration::from_secs(SETTINGS.mailblast_smtp_timeout_seconds);
    let mut session = manager
        .connect(
            &SETTINGS.mailblast_sender_email,
            &SETTINGS.mailblast_smtp_password,
            timeout,
        )
        .await?;

    let send_report = run_send_pass(
        &rows,
        &template,
        attachment.as_ref(),
        &SETTINGS.mailblast_sender_email,
        &mut session,
    )
    .await?;

    if let Err(quit_error) = session.quit().await {
        debug!("Ignoring QUIT failure after the pass: {}", quit_error);
    }

    report::log_summary(&send_report);
    let (success_path, failed_path) =
        report::write_report_files(&send_report, &SETTINGS.mailblast_output_dir)?;
    info!(
        "Result files written: '{}', '{}'",
        success_path.display(),
        failed_path.display()
    );
    Ok(())
}

/// Picks the composer from settings and recovers a failed generation by
/// falling back to an empty body, which the engine then refuses with a
/// configuration error instead of crashing the run.
async fn compose_template() -> MailBlastResult<MessageTemplate> {
    let subject = SETTINGS.mailblast_subject.clone();

    let result = if let Some(prompt) = &SETTINGS.mailblast_prompt {
        match SETTINGS.mailblast_openai_api_key.clone() {
            Some(api_key) => {
                info!("Generating message body from prompt");
                GeneratedComposer::new(
                    subject,
                    prompt.clone(),
                    SETTINGS.mailblast_openai_model.clone(),
                    SETTINGS.mailblast_openai_base_url.clone(),
                    api_key,
                )
                .compose()
                .await
            }
            None => Err(raise_error!(
                "OpenAI API key not set".into(),
                ErrorCode::GenerationFailed
            )),
        }
    } else {
        ManualComposer::new(
            subject,
            SETTINGS.mailblast_body.clone().unwrap_or_default(),
        )
        .compose()
        .await
    };

    match result {
        Err(generation_error) if generation_error.code() == ErrorCode::GenerationFailed => {
            error!(
                "Text generation failed, leaving the body empty: {}",
                generation_error
            );
            Ok(MessageTemplate {
                subject: SETTINGS.mailblast_subject.clone(),
                body: String::new(),
            })
        }
        other => other,
    }
}

fn initialize_tls() -> MailBlastResult<()> {
    rustls::crypto::CryptoProvider::install_default(rustls::crypto::ring::default_provider())
        .map_err(|_| {
            raise_error!(
                "failed to set crypto provider".into(),
                ErrorCode::InternalError
            )
        })
}
