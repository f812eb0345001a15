pub mod openai;
pub mod provider;
pub mod types;

pub use openai::OpenAiClient;
pub use provider::{CompletionClient, LlmError};
pub use types::{ChatMessage, ChatRequest};

#[cfg(test)]
pub mod testing;
