use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::jobs::StoreError;
use crate::llm::LlmError;

/// The only failure text a chat client ever sees.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Collapses any failure into the opaque 500 the chat widget expects.
    pub fn generic() -> Self {
        ApiError::Internal(GENERIC_FAILURE_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Failure of a single chat inquiry.
///
/// Each stage keeps its own variant so logs and tests can tell them apart;
/// the HTTP layer flattens all of them into [`ApiError::generic`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("language model call failed: {0}")]
    ExternalService(#[from] LlmError),

    #[error("job store query failed: {0}")]
    Retrieval(#[from] StoreError),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "validation",
            PipelineError::ExternalService(_) => "external_service",
            PipelineError::Retrieval(_) => "retrieval",
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(_: PipelineError) -> Self {
        ApiError::generic()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config at '{path}': {reason}")]
    Invalid { path: String, reason: String },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to deserialize config: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
