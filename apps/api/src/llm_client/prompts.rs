// Shared prompt fragments.
// Each endpoint defines its own prompts.rs alongside it; cross-cutting
// fragments live here.

/// Appended to any prompt whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond ONLY with a JSON object \
    (no markdown, no backticks, no preamble).";
