use std::sync::Arc;

use super::prompt::job_tracking_request;
use crate::llm::{CompletionClient, LlmError};

/// First model call: restates the raw message so the extractor can find
/// `job_id`, `job name` and `column` mentions in it.
#[derive(Clone)]
pub struct QueryInterpreter {
    client: Arc<dyn CompletionClient>,
    max_tokens: u32,
}

impl QueryInterpreter {
    pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }

    pub async fn interpret(&self, user_input: &str) -> Result<String, LlmError> {
        let request = job_tracking_request(user_input, self.max_tokens);
        let interpretation = self.client.complete(request).await?;
        tracing::debug!(
            "Interpretation from {}: {}",
            self.client.name(),
            interpretation
        );
        Ok(interpretation)
    }
}
