// Portfolio chat: deterministic intent routing over the resume, with an LLM fallback.
// Remote model calls go through llm_client only.

pub mod answers;
pub mod canned;
pub mod handlers;
pub mod history;
pub mod intents;
pub mod prompts;
pub mod resume;
pub mod retrieval;
pub mod router;
pub mod service;
