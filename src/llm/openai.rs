use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::provider::{CompletionClient, LlmError};
use super::types::ChatRequest;
use crate::core::config::LlmConfig;

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// No request timeout is configured: a hung upstream hangs the caller.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(&config.base_url, &config.model, &config.api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut body = json!({
            "model": self.model,
            "messages": request.messages,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(t) = request.max_tokens {
                obj.insert("max_tokens".to_string(), json!(t));
            }
        }

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let payload: CompletionResponse = res.json().await?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                LlmError::MalformedResponse("missing choices[0].message.content".to_string())
            })
    }
}
