pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_fit;
use crate::chat::handlers::handle_chat;
use crate::errors::AppError;
use crate::improve::handlers::handle_improve_prompt;
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze-fit",
            post(handle_analyze_fit).fallback(method_not_allowed),
        )
        .route("/api/chat", post(handle_chat).fallback(method_not_allowed))
        .route(
            "/api/improve-prompt",
            post(handle_improve_prompt).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}
