//! Input gates applied before anything is sent upstream.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes.

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{Message, Role};

/// Histories longer than this are refused outright.
pub const MAX_CONVERSATION_TURNS: usize = 20;
/// Only the most recent turns are forwarded.
pub const FORWARDED_TURNS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 2_000;

pub const CONVERSATION_LIMIT_MESSAGE: &str =
    "Conversation limit reached. Please start a new session.";

/// A conversation turn as sent by the browser. Both fields are untrusted:
/// anything but `"assistant"` is a user turn and non-string content is empty.
#[derive(Debug, Clone, Default)]
pub struct IncomingMessage {
    pub role: Value,
    pub content: Value,
}

impl IncomingMessage {
    /// A turn that is not an object reads as an empty user turn.
    pub fn from_value(value: &Value) -> Self {
        Self {
            role: value.get("role").cloned().unwrap_or_default(),
            content: value.get("content").cloned().unwrap_or_default(),
        }
    }
}

/// Present and non-blank after trimming. The value is returned untrimmed.
pub fn require_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

pub fn ensure_max_chars(text: &str, max: usize, message: &str) -> Result<(), AppError> {
    if char_len(text) > max {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
pub fn clip_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Applies the conversation gates: refuse oversize histories, keep the
/// latest `FORWARDED_TURNS`, coerce roles and clip content.
pub fn sanitize_conversation(messages: &[IncomingMessage]) -> Result<Vec<Message>, AppError> {
    if messages.len() > MAX_CONVERSATION_TURNS {
        return Err(AppError::BadRequest(CONVERSATION_LIMIT_MESSAGE.to_string()));
    }

    let recent = &messages[messages.len().saturating_sub(FORWARDED_TURNS)..];

    Ok(recent
        .iter()
        .map(|m| Message {
            role: match m.role.as_str() {
                Some("assistant") => Role::Assistant,
                _ => Role::User,
            },
            content: m
                .content
                .as_str()
                .map(|c| clip_chars(c, MAX_MESSAGE_CHARS).to_string())
                .unwrap_or_default(),
        })
        .collect())
}
