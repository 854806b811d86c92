pub mod handlers;
pub mod improver;
pub mod prompts;
