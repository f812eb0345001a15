use async_trait::async_trait;
use thiserror::Error;

use super::types::ChatRequest;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to language model failed: {0}")]
    Transport(String),

    #[error("language model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion payload: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LlmError::MalformedResponse(err.to_string())
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}

/// Anything that turns a chat request into generated text.
///
/// The pipeline only depends on this trait, so tests swap in a scripted
/// client and production uses [`super::OpenAiClient`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// provider name, used in logs
    fn name(&self) -> &str;

    /// single non-streaming completion; no retry
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}
