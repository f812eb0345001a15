use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::core::config::{AppConfig, AppPaths};
use crate::jobs;
use crate::llm::{CompletionClient, OpenAiClient};
use crate::pipeline::JobInquiryPipeline;

/// Shared by every route. Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pipeline: JobInquiryPipeline,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Opens the job store and the completion client named in `config`.
    pub async fn initialize(config: AppConfig, paths: &AppPaths) -> anyhow::Result<Arc<Self>> {
        let store = jobs::connect(&config.database, &paths.user_data_dir)
            .await
            .context("Failed to open job store")?;

        let client = OpenAiClient::from_config(&config.llm);
        tracing::info!("Using completion model {}", client.model());
        let client: Arc<dyn CompletionClient> = Arc::new(client);

        let pipeline = JobInquiryPipeline::from_config(&config, client, store);
        Ok(Self::new(config, pipeline))
    }

    pub fn new(config: AppConfig, pipeline: JobInquiryPipeline) -> Arc<Self> {
        Arc::new(AppState {
            config,
            pipeline,
            started_at: Utc::now(),
        })
    }

    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}
