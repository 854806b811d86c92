//! Test doubles shared by the endpoint and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{CompletionRequest, CompletionService, LlmError, LlmResponse};

enum Reply {
    Text(String),
    Status(u16),
}

/// Records every request and answers with a canned reply.
pub struct FakeCompletions {
    reply: Reply,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletions {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(status),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for FakeCompletions {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, LlmError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(LlmResponse::from_text(text)),
            Reply::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}
