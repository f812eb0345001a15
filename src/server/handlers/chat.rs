use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::Instrument;
use uuid::Uuid;

use crate::core::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    /// Missing is treated as empty and fails validation.
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// `POST /api/chat`. Every failure, including an unreadable body, becomes
/// the same opaque 500.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);
    handle_chat(&state, payload).instrument(span).await
}

async fn handle_chat(
    state: &AppState,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::error!(kind = "validation", "Rejected chat body: {}", rejection.body_text());
        ApiError::generic()
    })?;
    tracing::info!("User input: {}", body.user_input);

    match state
        .pipeline
        .respond(&body.user_input, body.user_name.as_deref())
        .await
    {
        Ok(reply) => {
            tracing::info!("Bot response: {}", reply);
            Ok(Json(json!({ "botResponse": reply })))
        }
        Err(err) => {
            tracing::error!(kind = err.kind(), "Chat request failed: {}", err);
            Err(err.into())
        }
    }
}
