// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::compose::{Composer, MessageTemplate};
use crate::modules::error::code::ErrorCode;
use crate::modules::error::MailBlastResult;
use crate::{mailblast_version, raise_error};
use serde::Deserialize;
use std::time::Duration;

/// Composes the body with one round-trip to a chat-completion endpoint.
///
/// The prompt describes the campaign; the first choice's content is used
/// verbatim as the body. Any failure along the way is a `GenerationFailed`
/// error that the shell recovers from by leaving the body empty.
pub struct GeneratedComposer {
    subject: String,
    prompt: String,
    model: String,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl GeneratedComposer {
    pub fn new(
        subject: String,
        prompt: String,
        model: String,
        base_url: String,
        api_key: String,
    ) -> Self {
        Self {
            subject,
            prompt,
            model,
            base_url,
            api_key,
        }
    }

    fn build_http_client() -> MailBlastResult<reqwest::Client> {
        reqwest::ClientBuilder::new()
            .user_agent(format!("MailBlast/{}", mailblast_version!()))
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                raise_error!(
                    format!("Failed to build HTTP client: {:#?}", e),
                    ErrorCode::InternalError
                )
            })
    }

    fn extract_body(completion: ChatCompletionResponse) -> MailBlastResult<String> {
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                raise_error!(
                    "Text generation returned no content".into(),
                    ErrorCode::GenerationFailed
                )
            })
    }
}

impl Composer for GeneratedComposer {
    async fn compose(&self) -> MailBlastResult<MessageTemplate> {
        let client = Self::build_http_client()?;
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": self.prompt }],
        });

        let response = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::GenerationFailed))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(raise_error!(
                format!("Text generation request failed with {}: {}", status, text),
                ErrorCode::GenerationFailed
            ));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| raise_error!(format!("{:#}", e), ErrorCode::GenerationFailed))?;

        Ok(MessageTemplate {
            subject: self.subject.clone(),
            body: Self::extract_body(completion)?,
        })
    }
}
