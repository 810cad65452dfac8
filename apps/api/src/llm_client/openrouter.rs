//! OpenRouter chat-completions call (OpenAI-compatible wire format).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{status_error, LlmError, MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::config::ProviderConfig;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Returns the trimmed reply of the first choice.
/// No choices at all is `EmptyContent`; a choice without content yields a placeholder.
pub(super) async fn complete(
    client: &Client,
    providers: &ProviderConfig,
    system: &str,
    prompt: &str,
) -> Result<String, LlmError> {
    let body = CompletionRequest {
        model: &providers.openrouter_model,
        messages: vec![
            Message {
                role: "system",
                content: system,
            },
            Message {
                role: "user",
                content: prompt,
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_OUTPUT_TOKENS,
    };

    let response = client
        .post(format!("{}/chat/completions", providers.openrouter_base_url))
        .bearer_auth(&providers.openrouter_api_key)
        .header("content-type", "application/json")
        .header("HTTP-Referer", &providers.app_url)
        .header("X-Title", &providers.site_name)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    let data: CompletionResponse = response.json().await?;
    debug!("OpenRouter returned {} choice(s)", data.choices.len());

    let first = data.choices.into_iter().next().ok_or(LlmError::EmptyContent)?;
    Ok(first
        .message
        .and_then(|m| m.content)
        .map(|c| c.trim().to_string())
        .unwrap_or_else(|| "No answer content.".to_string()))
}
