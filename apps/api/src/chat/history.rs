//! Conversation log: append-only storage for chat messages.
//!
//! `AppState` carries an `Arc<dyn MessageStore>`; production uses `PgMessageStore`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::chat::{ChatMessageRow, MessageRole};

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Appends one message and returns the stored row.
    async fn append(&self, role: MessageRole, content: &str) -> Result<ChatMessageRow, AppError>;

    /// Every stored message, oldest first.
    async fn history(&self) -> Result<Vec<ChatMessageRow>, AppError>;
}

pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn append(&self, role: MessageRole, content: &str) -> Result<ChatMessageRow, AppError> {
        // Append-only: rows are never updated or deleted
        let row = sqlx::query_as::<_, ChatMessageRow>(
            r#"
            INSERT INTO chat_messages (role, content)
            VALUES ($1, $2)
            RETURNING id, role, content, created_at
            "#,
        )
        .bind(role.as_str())
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        debug!("Stored {} message {}", row.role, row.id);
        Ok(row)
    }

    async fn history(&self) -> Result<Vec<ChatMessageRow>, AppError> {
        Ok(sqlx::query_as::<_, ChatMessageRow>(
            "SELECT id, role, content, created_at FROM chat_messages ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
