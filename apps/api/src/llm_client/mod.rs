/// LLM client: the only place that talks to remote model providers.
///
/// Chain: OpenRouter (primary) → Gemini (secondary, several candidate models).
/// Every outcome, including failures, comes back as an `Answer` so the chat
/// request always completes with some text and a model label.
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::models::chat::Answer;

mod gemini;
mod openrouter;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 900;

/// OpenRouter keys carry this prefix; anything else is treated as unset.
const OPENROUTER_KEY_PREFIX: &str = "sk-or-v1-";

/// Tried after the configured Gemini model, in this order.
const GEMINI_FALLBACK_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-2.5-flash-lite",
];

/// Label used when no provider is configured.
pub const NO_MODEL: &str = "no-model";

const NO_MODEL_MESSAGE: &str =
    "No valid model key found. Set OPENROUTER_API_KEY (sk-or-v1-...) or GEMINI_API_KEY in .env.";
const OPENROUTER_UNAUTHORIZED: &str =
    "OpenRouter returned 401 Unauthorized. Check OPENROUTER_API_KEY or use GEMINI_API_KEY.";
const GEMINI_UNAUTHORIZED: &str =
    "Gemini returned 401 Unauthorized. Verify GEMINI_API_KEY in .env and restart the server.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0}")]
    Http(reqwest::Error),

    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("404 Not Found")]
    NotFound,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

// Error text reaches chat answers; the Gemini URL carries `?key=`.
impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e.without_url())
    }
}

/// Maps a non-success status to the error variant the chain branches on.
async fn status_error(response: reqwest::Response) -> LlmError {
    let status = response.status().as_u16();
    match status {
        401 => LlmError::Unauthorized,
        404 => LlmError::NotFound,
        _ => LlmError::Api {
            status,
            message: response.text().await.unwrap_or_default(),
        },
    }
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
}

impl LlmClient {
    pub fn new() -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
        })
    }

    /// Runs the provider fallback chain for a question the router could not answer.
    pub async fn answer(&self, providers: &ProviderConfig, system: &str, prompt: &str) -> Answer {
        let openrouter_ready = providers.openrouter_api_key.starts_with(OPENROUTER_KEY_PREFIX);
        let gemini_ready = !providers.gemini_api_key.is_empty();

        if openrouter_ready {
            let model = providers.openrouter_model.as_str();
            match openrouter::complete(&self.client, providers, system, prompt).await {
                Ok(text) => {
                    info!("Answered by OpenRouter model {model}");
                    return Answer::new(text, model);
                }
                Err(LlmError::Unauthorized) if gemini_ready => {
                    warn!("OpenRouter rejected the API key, falling back to Gemini");
                }
                Err(LlmError::Unauthorized) => return Answer::new(OPENROUTER_UNAUTHORIZED, model),
                Err(LlmError::EmptyContent) => {
                    return Answer::new("No response returned by model.", model)
                }
                Err(e) => {
                    warn!("OpenRouter request failed: {e}");
                    return Answer::new(format!("OpenRouter request failed: {e}"), model);
                }
            }
        } else if !providers.openrouter_api_key.is_empty() {
            warn!(
                "OPENROUTER_API_KEY does not start with {OPENROUTER_KEY_PREFIX}, skipping OpenRouter"
            );
        }

        if gemini_ready {
            return self.answer_with_gemini(providers, system, prompt).await;
        }

        Answer::new(NO_MODEL_MESSAGE, NO_MODEL)
    }

    /// Tries each candidate model strictly in sequence until one produces text.
    async fn answer_with_gemini(
        &self,
        providers: &ProviderConfig,
        system: &str,
        prompt: &str,
    ) -> Answer {
        let mut last_error = String::new();

        for model in gemini_candidates(&providers.gemini_model) {
            match gemini::generate(&self.client, providers, model, system, prompt).await {
                Ok(text) => {
                    info!("Answered by Gemini model {model}");
                    return Answer::new(text, model);
                }
                // a bad key fails every candidate the same way
                Err(LlmError::Unauthorized) => return Answer::new(GEMINI_UNAUTHORIZED, model),
                Err(LlmError::NotFound) => {
                    last_error = format!("Model '{model}' not found for Gemini API v1beta.");
                }
                Err(LlmError::EmptyContent) => {
                    last_error = format!("No response returned by Gemini model '{model}'.");
                }
                Err(e) => {
                    last_error = format!("Gemini request failed: {e}");
                }
            }
            warn!("Gemini candidate {model} failed: {last_error}");
        }

        Answer::new(
            format!("Gemini request failed for all configured models. Last error: {last_error}"),
            providers.gemini_model.as_str(),
        )
    }
}

/// Configured model first, then the fixed defaults, without duplicates.
fn gemini_candidates(configured: &str) -> Vec<&str> {
    let mut candidates: Vec<&str> = Vec::new();
    for model in std::iter::once(configured).chain(GEMINI_FALLBACK_MODELS.iter().copied()) {
        if !model.is_empty() && !candidates.contains(&model) {
            candidates.push(model);
        }
    }
    candidates
}
