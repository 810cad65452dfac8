use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_OPENROUTER_MODEL: &str = "meta-llama/llama-3.3-8b-instruct:free";
const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Loaded once at startup and carried in `AppState`; fails fast if `DATABASE_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub resume_path: PathBuf,
    pub providers: ProviderConfig,
}

/// Everything the LLM fallback chain needs to reach its providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Sent to OpenRouter as `HTTP-Referer`.
    pub app_url: String,
    /// Sent to OpenRouter as `X-Title`.
    pub site_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // .env values win over whatever the process inherited
        dotenvy::dotenv_override().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    /// `from_env` delegates here; tests use it to reload settings without touching the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL")
                .with_context(|| "Required environment variable 'DATABASE_URL' is not set")?,
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            resume_path: lookup("RESUME_PATH")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_resume_path),
            providers: ProviderConfig {
                openrouter_api_key: var("OPENROUTER_API_KEY", ""),
                openrouter_model: var("OPENROUTER_MODEL", DEFAULT_OPENROUTER_MODEL),
                openrouter_base_url: var("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL),
                gemini_api_key: var("GEMINI_API_KEY", ""),
                gemini_model: var("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                gemini_base_url: var("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                app_url: var("APP_URL", "http://localhost:5173"),
                site_name: var("SITE_NAME", "Portfolio AI"),
            },
        })
    }
}

/// The resume ships next to the crate manifest.
fn default_resume_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resume.md")
}
