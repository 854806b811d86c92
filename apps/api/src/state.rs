use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// The completion service. `LlmClient` in production, a fake in tests.
    pub completions: Arc<dyn CompletionService>,
}
