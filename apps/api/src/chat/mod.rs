// Persona chat about the profile, with guardrails against free advice and
// off-topic use. Strict: an empty completion fails the request.

pub mod conversation;
pub mod handlers;
pub mod prompts;
