//! Client for Perplexity's OpenAI-compatible chat completions API
mod core;

pub use self::core::{CompletionOptions, Message, Role, completion, completion_content};
