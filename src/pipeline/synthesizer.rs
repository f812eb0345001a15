use std::sync::Arc;

use super::prompt::{job_tracking_request, synthesis_prompt};
use crate::llm::{CompletionClient, LlmError};

/// Second model call: phrases the retrieved sentence as the final reply.
#[derive(Clone)]
pub struct ResponseSynthesizer {
    client: Arc<dyn CompletionClient>,
    max_tokens: u32,
}

impl ResponseSynthesizer {
    pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }

    pub async fn synthesize(&self, user_input: &str, retrieved: &str) -> Result<String, LlmError> {
        let request = job_tracking_request(synthesis_prompt(user_input, retrieved), self.max_tokens);
        self.client.complete(request).await
    }
}
