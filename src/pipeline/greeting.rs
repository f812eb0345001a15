//! Canned replies for small talk, skipping the model and the store.

use std::sync::LazyLock;

use regex::Regex;

static GREETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(hi|hello|hey|greetings|good\s+morning|good\s+afternoon|good\s+evening)\b")
        .expect("greeting regex")
});

/// Whole-word match, so "this" or "they" do not count.
pub fn is_greeting(input: &str) -> bool {
    GREETING_RE.is_match(input)
}

pub fn greeting_reply(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!("Hello {}, how can I assist you today?", name),
        None => "Hello! How can I assist you today?".to_string(),
    }
}

pub fn personalize(answer: String, user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!("Hello {}, {}", name, answer),
        None => answer,
    }
}
