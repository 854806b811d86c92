use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::improve::improver::{ImprovePromptPipeline, ImprovePromptRequest, ImprovedPrompt};
use crate::pipeline::{self, JsonBody};
use crate::state::AppState;

/// POST /api/improve-prompt
pub async fn handle_improve_prompt(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ImprovePromptRequest>,
) -> Result<Json<ImprovedPrompt>, AppError> {
    let improved =
        pipeline::run::<ImprovePromptPipeline>(state.completions.as_ref(), request).await?;
    Ok(Json(improved))
}
