//! Persona chat — client-held history in, one guarded reply out.

use anyhow::ensure;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::prompts::{analysis_context_block, CHAT_SYSTEM_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::Message;
use crate::pipeline::sanitize::{sanitize_conversation, IncomingMessage};
use crate::pipeline::{Endpoint, Pipeline};
use crate::profile::PROFILE;

/// Both fields are read loosely; their shape is checked in `validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Value,
    #[serde(default)]
    pub analysis_context: Value,
}

/// Summary of a fit analysis the visitor already ran. Values are
/// interpolated as sent; any other fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub overall_fit: Value,
    pub headline: Value,
    pub summary: Value,
}

impl AnalysisContext {
    /// Only an object carries context.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Some(Self {
            overall_fit: field("overallFit"),
            headline: field("headline"),
            summary: field("summary"),
        })
    }
}

#[derive(Debug)]
pub struct ChatInput {
    pub messages: Vec<Message>,
    pub context: Option<AnalysisContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

pub struct ChatPipeline;

impl Pipeline for ChatPipeline {
    const ENDPOINT: Endpoint = Endpoint::Chat;
    const MAX_TOKENS: u32 = 1000;

    type Request = ChatRequest;
    type Input = ChatInput;
    type Output = ChatReply;

    fn validate(request: ChatRequest) -> Result<ChatInput, AppError> {
        let turns: Vec<IncomingMessage> = match &request.messages {
            Value::Array(items) if !items.is_empty() => {
                items.iter().map(IncomingMessage::from_value).collect()
            }
            _ => return Err(AppError::BadRequest("Messages are required".to_string())),
        };

        Ok(ChatInput {
            messages: sanitize_conversation(&turns)?,
            context: AnalysisContext::from_value(&request.analysis_context),
        })
    }

    fn system_prompt(input: &ChatInput) -> Option<String> {
        Some(build_system_prompt(input.context.as_ref()))
    }

    fn messages(input: ChatInput) -> Vec<Message> {
        input.messages
    }

    fn normalize(text: &str) -> anyhow::Result<ChatReply> {
        let reply = text.trim();
        ensure!(!reply.is_empty(), "completion contained no text");
        Ok(ChatReply {
            reply: reply.to_string(),
        })
    }
}

pub fn build_system_prompt(context: Option<&AnalysisContext>) -> String {
    let mut prompt = CHAT_SYSTEM_TEMPLATE.replace("{profile}", PROFILE);

    if let Some(ctx) = context {
        prompt.push_str(&analysis_context_block(
            &display_value(&ctx.overall_fit),
            &display_value(&ctx.headline),
            &display_value(&ctx.summary),
        ));
    }

    prompt
}

/// Strings without quotes, absent as empty, anything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
