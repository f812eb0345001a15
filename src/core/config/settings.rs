//! Typed view of the merged YAML configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://job_assist.db";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub app: AppSection,
    pub greeting: GreetingConfig,
    pub llm: LlmConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Upper bound on `userInput`, in characters.
    pub max_input_length: usize,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            max_input_length: 4000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub interpreter_max_tokens: u32,
    pub synthesizer_max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            interpreter_max_tokens: 100,
            synthesizer_max_tokens: 150,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative SQLite paths are resolved against the data directory.
    pub url: String,
    pub max_connections: u32,
    /// Create a missing SQLite file and `Job` table instead of failing.
    pub bootstrap: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            bootstrap: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: true,
        }
    }
}
