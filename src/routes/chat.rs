use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{error::AppResult, models::ChatMessage, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Handler for the chat endpoint
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = state.chat_provider.reply(&request.messages).await?;
    Ok(Json(ChatResponse { message }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;

    use super::*;
    use crate::{
        catalog::Catalog,
        services::providers::{MockChatProvider, MockSearchProvider},
        state::AppState,
    };

    #[tokio::test]
    async fn test_chat_handler_delegates_to_the_configured_provider() {
        let mut chat_provider = MockChatProvider::new();
        chat_provider
            .expect_reply()
            .returning(|_| Ok("canned answer".to_string()));

        let state = AppState::with_providers(
            Arc::new(Catalog::builtin()),
            Arc::new(MockSearchProvider::new()),
            Arc::new(chat_provider),
        );

        let Json(response) = chat(
            State(state),
            Json(ChatRequest {
                messages: vec![ChatMessage::user("anything")],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "canned answer");
    }
}
