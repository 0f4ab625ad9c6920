use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::ChatAssistant;
use crate::language::Language;

#[derive(Clone)]
pub(crate) struct ChatState {
    pub(crate) assistant: Arc<ChatAssistant>,
    pub(crate) default_language: Language,
}

/// Router builder for the chat assistant endpoints.
pub fn chat_router(assistant: Arc<ChatAssistant>, default_language: Language) -> Router {
    Router::new()
        .route("/api/v1/chat", post(message_handler))
        .route("/api/v1/chat/greeting", get(greeting_handler))
        .with_state(ChatState {
            assistant,
            default_language,
        })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) language: Option<Language>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GreetingParams {
    #[serde(default)]
    pub(crate) language: Option<Language>,
}

pub(crate) async fn message_handler(
    State(state): State<ChatState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let language = request.language.unwrap_or(state.default_language);
    match state.assistant.respond(&request.message, language) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn greeting_handler(
    State(state): State<ChatState>,
    Query(params): Query<GreetingParams>,
) -> Response {
    let language = params.language.unwrap_or(state.default_language);
    (StatusCode::OK, Json(state.assistant.greeting(language))).into_response()
}
