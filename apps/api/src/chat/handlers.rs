use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::service::answer_question;
use crate::errors::AppError;
use crate::models::chat::{ChatMessageRow, MessageRole};
use crate::state::AppState;

const MIN_QUESTION_CHARS: usize = 2;
const MAX_QUESTION_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub model: String,
}

fn validate_question(question: &str) -> Result<(), AppError> {
    let len = question.chars().count();
    if !(MIN_QUESTION_CHARS..=MAX_QUESTION_CHARS).contains(&len) {
        return Err(AppError::Validation(format!(
            "question must be between {MIN_QUESTION_CHARS} and {MAX_QUESTION_CHARS} characters, got {len}"
        )));
    }
    Ok(())
}

/// POST /api/chat
///
/// The question is stored before answering and the answer after; the two writes are
/// separate, so a failure in between leaves only the user message behind.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    validate_question(&req.question)?;

    state.store.append(MessageRole::User, &req.question).await?;

    let answer = answer_question(&req.question, &state.config, &state.llm).await;

    state
        .store
        .append(MessageRole::Assistant, &answer.text)
        .await?;

    Ok(Json(ChatResponse {
        answer: answer.text,
        model: answer.source,
    }))
}

/// GET /api/chat/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatMessageRow>>, AppError> {
    Ok(Json(state.store.history().await?))
}
