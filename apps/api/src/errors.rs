use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pipeline::Endpoint;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The response body is always `{"error": "<message>"}`; detail carried by a
/// variant is logged, never returned to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation error: {0}")]
    BadRequest(String),

    #[error("API key not configured")]
    MissingApiKey,

    #[error("{endpoint} upstream failure: {detail}")]
    Upstream { endpoint: Endpoint, detail: String },

    #[error("{endpoint} internal error: {error:#}")]
    Internal {
        endpoint: Endpoint,
        error: anyhow::Error,
    },
}

impl AppError {
    /// Classifies a completion-client failure for the given endpoint.
    pub fn from_llm(endpoint: Endpoint, err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::MissingApiKey,
            LlmError::Http(e) => AppError::Upstream {
                endpoint,
                detail: format!("transport: {e}"),
            },
            LlmError::Api { status, message } => AppError::Upstream {
                endpoint,
                detail: format!("status {status}: {message}"),
            },
            LlmError::Parse(e) => AppError::Internal {
                endpoint,
                error: anyhow::Error::new(e).context("undecodable completion response"),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidBody(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The caller-facing message.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::NotFound => "Not found".to_string(),
            AppError::InvalidBody(_) => "Invalid request body".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::MissingApiKey => "API key not configured".to_string(),
            AppError::Upstream { endpoint, .. } => endpoint.upstream_failure_message().to_string(),
            AppError::Internal { endpoint, .. } => endpoint.internal_failure_message().to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingApiKey => tracing::error!("ANTHROPIC_API_KEY is not set"),
            AppError::Upstream { endpoint, detail } => {
                tracing::error!(%endpoint, "Completion service error: {detail}")
            }
            AppError::Internal { endpoint, error } => {
                tracing::error!(%endpoint, "Internal error: {error:?}")
            }
            AppError::InvalidBody(detail) => tracing::debug!("Rejected request body: {detail}"),
            _ => {}
        }

        let body = Json(json!({ "error": self.public_message() }));

        (self.status(), body).into_response()
    }
}
