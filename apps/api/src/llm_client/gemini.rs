//! Gemini `generateContent` call for a single candidate model.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{status_error, LlmError, MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::config::ProviderConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Calls one Gemini model. Text parts of the first candidate are joined with spaces;
/// a blank result counts as `EmptyContent` so the caller moves on to the next model.
pub(super) async fn generate(
    client: &Client,
    providers: &ProviderConfig,
    model: &str,
    system: &str,
    prompt: &str,
) -> Result<String, LlmError> {
    let body = GenerateRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: prompt }],
        }],
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: system }],
        },
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    };

    let response = client
        .post(format!(
            "{}/models/{model}:generateContent",
            providers.gemini_base_url
        ))
        .query(&[("key", providers.gemini_api_key.as_str())])
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    let data: GenerateResponse = response.json().await?;
    let text = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(text.to_string())
}
