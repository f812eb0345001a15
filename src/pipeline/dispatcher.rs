//! Chooses the single store lookup for a set of extracted entities.

use super::entities::ExtractedEntities;
use crate::jobs::{JobStoreGateway, StoreError};

pub const CLARIFY_MESSAGE: &str =
    "Sorry, I didn't understand that. Can you ask about job status or job details?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalStrategy {
    StatusById(String),
    StatusByName(String),
    ColumnValue { job_id: String, column: String },
    Clarify,
}

impl RetrievalStrategy {
    /// Precedence: id, then name, then column+id, then clarify.
    ///
    /// `ColumnValue` needs a job id, which the first arm already takes, so it
    /// is never selected. The order is kept as is.
    pub fn select(entities: &ExtractedEntities) -> Self {
        if let Some(job_id) = &entities.job_id {
            RetrievalStrategy::StatusById(job_id.clone())
        } else if let Some(job_name) = &entities.job_name {
            RetrievalStrategy::StatusByName(job_name.clone())
        } else if let (Some(column), Some(job_id)) = (&entities.column, &entities.job_id) {
            RetrievalStrategy::ColumnValue {
                job_id: job_id.clone(),
                column: column.clone(),
            }
        } else {
            RetrievalStrategy::Clarify
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalStrategy::StatusById(_) => "status_by_id",
            RetrievalStrategy::StatusByName(_) => "status_by_name",
            RetrievalStrategy::ColumnValue { .. } => "column_value",
            RetrievalStrategy::Clarify => "clarify",
        }
    }
}

/// Runs exactly one lookup and returns its sentence.
pub async fn retrieve(
    gateway: &JobStoreGateway,
    entities: &ExtractedEntities,
) -> Result<String, StoreError> {
    let strategy = RetrievalStrategy::select(entities);
    tracing::info!("Retrieval strategy: {}", strategy.as_str());

    match strategy {
        RetrievalStrategy::StatusById(job_id) => gateway.status_by_job_id(&job_id).await,
        RetrievalStrategy::StatusByName(job_name) => gateway.status_by_job_name(&job_name).await,
        RetrievalStrategy::ColumnValue { job_id, column } => {
            gateway.column_value(&job_id, &column).await
        }
        RetrievalStrategy::Clarify => Ok(CLARIFY_MESSAGE.to_string()),
    }
}
