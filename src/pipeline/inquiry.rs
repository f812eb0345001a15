use std::sync::Arc;

use super::dispatcher::retrieve;
use super::entities::extract_entities;
use super::greeting::{greeting_reply, is_greeting, personalize};
use super::interpreter::QueryInterpreter;
use super::synthesizer::ResponseSynthesizer;
use crate::core::config::AppConfig;
use crate::core::errors::PipelineError;
use crate::jobs::{JobStore, JobStoreGateway};
use crate::llm::CompletionClient;

const DEFAULT_MAX_INPUT_LENGTH: usize = 4000;

/// Interpret → extract → retrieve → synthesize, once per message.
///
/// Holds no per-request state; one instance is shared by all requests. There
/// is no retry, caching, or timeout at this level.
#[derive(Clone)]
pub struct JobInquiryPipeline {
    interpreter: QueryInterpreter,
    gateway: JobStoreGateway,
    synthesizer: ResponseSynthesizer,
    max_input_length: usize,
    greetings_enabled: bool,
}

impl JobInquiryPipeline {
    pub fn new(
        interpreter: QueryInterpreter,
        gateway: JobStoreGateway,
        synthesizer: ResponseSynthesizer,
    ) -> Self {
        Self {
            interpreter,
            gateway,
            synthesizer,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            greetings_enabled: false,
        }
    }

    /// Both model stages share `client`; budgets come from `llm.*_max_tokens`.
    pub fn from_config(
        config: &AppConfig,
        client: Arc<dyn CompletionClient>,
        store: Arc<dyn JobStore>,
    ) -> Self {
        Self::new(
            QueryInterpreter::new(client.clone(), config.llm.interpreter_max_tokens),
            JobStoreGateway::new(store),
            ResponseSynthesizer::new(client, config.llm.synthesizer_max_tokens),
        )
        .with_max_input_length(config.app.max_input_length)
        .with_greetings(config.greeting.enabled)
    }

    pub fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }

    pub fn with_greetings(mut self, enabled: bool) -> Self {
        self.greetings_enabled = enabled;
        self
    }

    fn validate(&self, user_input: &str) -> Result<(), PipelineError> {
        if user_input.trim().is_empty() {
            return Err(PipelineError::Validation("input is empty".to_string()));
        }
        let length = user_input.chars().count();
        if length > self.max_input_length {
            return Err(PipelineError::Validation(format!(
                "input is {} characters, limit is {}",
                length, self.max_input_length
            )));
        }
        Ok(())
    }

    /// The core inquiry: returns the synthesized reply or the first error.
    pub async fn answer(&self, user_input: &str) -> Result<String, PipelineError> {
        self.validate(user_input)?;

        let interpretation = self.interpreter.interpret(user_input).await?;

        let entities = extract_entities(&interpretation);
        if entities.is_empty() {
            tracing::debug!("No entities in interpretation");
        } else {
            tracing::debug!("Extracted entities: {:?}", entities);
        }

        let retrieved = retrieve(&self.gateway, &entities).await?;
        tracing::debug!("Retrieved: {}", retrieved);

        let reply = self.synthesizer.synthesize(user_input, &retrieved).await?;
        Ok(reply)
    }

    /// Entry point for the chat endpoint.
    ///
    /// With greetings enabled, small talk gets a canned reply and a non-empty
    /// `user_name` prefixes every other answer. Otherwise this is `answer`.
    pub async fn respond(
        &self,
        user_input: &str,
        user_name: Option<&str>,
    ) -> Result<String, PipelineError> {
        if !self.greetings_enabled {
            return self.answer(user_input).await;
        }

        self.validate(user_input)?;
        let user_name = user_name.map(str::trim).filter(|name| !name.is_empty());

        if is_greeting(user_input) {
            tracing::debug!("Greeting detected, skipping inquiry");
            return Ok(greeting_reply(user_name));
        }

        let answer = self.answer(user_input).await?;
        Ok(personalize(answer, user_name))
    }
}
