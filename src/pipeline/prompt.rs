use crate::llm::{ChatMessage, ChatRequest};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for job tracking.";

/// System role plus a single user turn, capped at `max_tokens`.
pub fn job_tracking_request(user_content: impl Into<String>, max_tokens: u32) -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_content),
    ])
    .with_max_tokens(max_tokens)
}

pub fn synthesis_prompt(user_input: &str, retrieved: &str) -> String {
    format!(
        "The user asked: {}. Based on the database query, here is the relevant information: {}. \
         Generate a polite and helpful response based on this information.",
        user_input, retrieved
    )
}
