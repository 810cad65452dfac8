//! Chat pipeline: resume → deterministic router → LLM fallback chain.

use tracing::{debug, info};

use crate::chat::prompts::{build_chat_prompt, CHAT_SYSTEM};
use crate::chat::resume::load_resume;
use crate::chat::retrieval::{retrieve, TOP_K};
use crate::chat::router;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::chat::Answer;

/// Produces an answer for one question. Never fails: provider and configuration
/// problems come back as answer text with a label naming where they happened.
pub async fn answer_question(question: &str, config: &Config, llm: &LlmClient) -> Answer {
    let resume_text = load_resume(&config.resume_path).await;

    if let Some(answer) = router::route(question, &resume_text) {
        info!("Deterministic answer from {}", answer.source);
        return answer;
    }

    let context = retrieve(question, &resume_text, TOP_K);
    debug!("Retrieved {} chars of resume context", context.len());

    let prompt = build_chat_prompt(&context, question);
    llm.answer(&config.providers, CHAT_SYSTEM, &prompt).await
}
