//! Shared request pipeline.
//!
//! Every endpoint is the same linear chain with early exits:
//! body parse → validate → assemble prompt → one completion call →
//! concatenate text → normalize. Endpoints differ only in the pieces
//! described by the `Pipeline` trait.

use std::fmt;

use axum::extract::FromRequest;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, CompletionService, Message};

pub mod sanitize;

/// Identifies an endpoint for logging and caller-facing failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    FitAnalysis,
    Chat,
    ImprovePrompt,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::FitAnalysis => "fit-analysis",
            Endpoint::Chat => "chat",
            Endpoint::ImprovePrompt => "prompt-improve",
        }
    }

    /// Returned when the completion service fails or its output is unusable.
    pub fn upstream_failure_message(self) -> &'static str {
        match self {
            Endpoint::FitAnalysis => "Analysis failed. Please try again.",
            Endpoint::Chat => "Chat failed. Please try again.",
            Endpoint::ImprovePrompt => "Failed to process prompt",
        }
    }

    /// Returned for anything unexpected.
    pub fn internal_failure_message(self) -> &'static str {
        match self {
            Endpoint::FitAnalysis | Endpoint::Chat => "Something went wrong. Please try again.",
            Endpoint::ImprovePrompt => "Internal server error",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// JSON body extractor whose every rejection becomes a 400 `Invalid request body`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// One endpoint's configuration of the shared pipeline.
pub trait Pipeline {
    const ENDPOINT: Endpoint;
    /// Upper bound on generated output, in tokens.
    const MAX_TOKENS: u32;

    /// Inbound body as deserialized from JSON.
    type Request: DeserializeOwned + Send;
    /// Request after validation and sanitization.
    type Input: Send;
    type Output: Serialize + Send;

    /// Field checks and size bounds. Runs before any outbound call.
    fn validate(request: Self::Request) -> Result<Self::Input, AppError>;

    fn system_prompt(input: &Self::Input) -> Option<String>;

    fn messages(input: Self::Input) -> Vec<Message>;

    /// Turns the concatenated completion text into the endpoint's shape.
    fn normalize(text: &str) -> anyhow::Result<Self::Output>;

    /// Lenient endpoints return a substitute when `normalize` fails;
    /// strict ones keep the default and fail the request.
    fn fallback(_text: &str) -> Option<Self::Output> {
        None
    }
}

/// Runs one request through pipeline `P`.
pub async fn run<P: Pipeline>(
    completions: &dyn CompletionService,
    request: P::Request,
) -> Result<P::Output, AppError> {
    let span = info_span!(
        "pipeline",
        endpoint = %P::ENDPOINT,
        request_id = %Uuid::new_v4()
    );

    async move {
        let input = P::validate(request)?;

        let completion = CompletionRequest {
            system: P::system_prompt(&input),
            messages: P::messages(input),
            max_tokens: P::MAX_TOKENS,
        };

        let response = completions
            .complete(&completion)
            .await
            .map_err(|e| AppError::from_llm(P::ENDPOINT, e))?;

        let text = response.text();

        match P::normalize(&text) {
            Ok(output) => Ok(output),
            Err(e) => match P::fallback(&text) {
                Some(output) => {
                    warn!("Completion did not match expected shape, using fallback: {e:#}");
                    Ok(output)
                }
                None => Err(AppError::Upstream {
                    endpoint: P::ENDPOINT,
                    detail: format!("unusable completion: {e:#}"),
                }),
            },
        }
    }
    .instrument(span)
    .await
}
