//! Axum route handlers for the chat API.

use axum::{extract::State, Json};

use crate::chat::conversation::{ChatPipeline, ChatReply, ChatRequest};
use crate::errors::AppError;
use crate::pipeline::{self, JsonBody};
use crate::state::AppState;

/// POST /api/chat
///
/// Answers the latest turn of a client-held conversation about the profile.
/// The full history is resent on every call; nothing is stored server-side.
pub async fn handle_chat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = pipeline::run::<ChatPipeline>(state.completions.as_ref(), request).await?;
    Ok(Json(reply))
}
