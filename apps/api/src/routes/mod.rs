pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/chat", post(handlers::handle_chat))
        .route("/api/chat/history", get(handlers::handle_history))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::chat::history::memory::InMemoryMessageStore;
    use crate::config::Config;
    use crate::llm_client::LlmClient;

    const RESUME: &str = "\
# Sunay Revad
Age: 21 (share only when asked)

## Contact
Email: sunay@example.com

## Education
- DA-IICT, B.Tech ICT
";

    /// Router over an in-memory store, a temp resume and no provider keys.
    fn test_app(dir: &tempfile::TempDir) -> Router {
        let resume_path = dir.path().join("resume.md");
        std::fs::write(&resume_path, RESUME).unwrap();
        let resume_path = resume_path.to_string_lossy().to_string();

        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://unused".to_string()),
            "RESUME_PATH" => Some(resume_path.clone()),
            _ => None,
        })
        .unwrap();

        build_router(AppState {
            store: Arc::new(InMemoryMessageStore::default()),
            llm: LlmClient::new().unwrap(),
            config,
        })
    }

    async fn post_question(app: &Router, question: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "question": question }).to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn get_json(app: &Router, uri: &str) -> Value {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        assert_eq!(get_json(&app, "/health").await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_chat_deterministic_answer() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        let response = post_question(&app, "How old are you?").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "answer": "Sunay is 21.", "model": "deterministic-age-parser" })
        );
    }

    #[tokio::test]
    async fn test_history_keeps_turn_order() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        post_question(&app, "How old are you?").await;
        post_question(&app, "What's your email?").await;

        let history = get_json(&app, "/api/chat/history").await;
        let rows = history.as_array().unwrap();
        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r["role"].as_str().unwrap(), r["content"].as_str().unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("user", "How old are you?"),
                ("assistant", "Sunay is 21."),
                ("user", "What's your email?"),
                ("assistant", "## Contact\nEmail: sunay@example.com"),
            ]
        );
        let ids: Vec<i64> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(rows[0]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_unmatched_question_without_keys() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        let response = post_question(&app, "Where did you study?").await;
        let body = body_json(response).await;
        assert_eq!(body["model"], "no-model");

        let history = get_json(&app, "/api/chat/history").await;
        assert_eq!(history.as_array().unwrap().len(), 2);
        assert_eq!(history[1]["content"], body["answer"]);
    }

    #[tokio::test]
    async fn test_question_too_short_rejected_and_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        let response = post_question(&app, "?").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");

        let history = get_json(&app, "/api/chat/history").await;
        assert!(history.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_resume_still_answers() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        std::fs::remove_file(dir.path().join("resume.md")).unwrap();

        let response = post_question(&app, "How old are you?").await;
        assert_eq!(
            body_json(response).await["answer"],
            "Age is not listed in the profile."
        );
    }
}
