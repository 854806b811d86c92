//! Prompt improvement — rewrites a user's prompt and explains the changes.
//!
//! Lenient: if the model's answer is not the expected JSON object, the raw
//! text becomes the improved prompt and a stock explanation is attached.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::improve::prompts::{FALLBACK_EXPLANATION, IMPROVER_SYSTEM, IMPROVE_PROMPT_TEMPLATE};
use crate::llm_client::extract::parse_json;
use crate::llm_client::Message;
use crate::pipeline::sanitize::{ensure_max_chars, require_text};
use crate::pipeline::{Endpoint, Pipeline};

pub const MAX_PROMPT_CHARS: usize = 2_000;
const INVALID_PROMPT: &str = "Invalid prompt";

#[derive(Debug, Deserialize)]
pub struct ImprovePromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovedPrompt {
    pub improved_prompt: String,
    /// HTML fragment.
    pub explanation: String,
}

pub struct ImprovePromptPipeline;

impl Pipeline for ImprovePromptPipeline {
    const ENDPOINT: Endpoint = Endpoint::ImprovePrompt;
    const MAX_TOKENS: u32 = 1500;

    type Request = ImprovePromptRequest;
    type Input = String;
    type Output = ImprovedPrompt;

    fn validate(request: ImprovePromptRequest) -> Result<String, AppError> {
        let prompt = require_text(request.prompt, INVALID_PROMPT)?;
        ensure_max_chars(&prompt, MAX_PROMPT_CHARS, INVALID_PROMPT)?;
        Ok(prompt)
    }

    fn system_prompt(_prompt: &String) -> Option<String> {
        Some(IMPROVER_SYSTEM.to_string())
    }

    fn messages(prompt: String) -> Vec<Message> {
        vec![Message::user(IMPROVE_PROMPT_TEMPLATE.replace("{prompt}", &prompt))]
    }

    fn normalize(text: &str) -> anyhow::Result<ImprovedPrompt> {
        Ok(parse_json(text)?)
    }

    fn fallback(text: &str) -> Option<ImprovedPrompt> {
        Some(ImprovedPrompt {
            improved_prompt: text.to_string(),
            explanation: FALLBACK_EXPLANATION.to_string(),
        })
    }
}
