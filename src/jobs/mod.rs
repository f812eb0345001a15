//! Read-only access to the relational `Job` table.
//!
//! - `JobStore`: backend trait, one raw lookup per query shape
//! - `JobStoreGateway`: turns lookups into the sentences the pipeline feeds
//!   to the response synthesizer

mod gateway;
mod mysql;
mod sqlite;
mod store;

#[cfg(test)]
pub mod testing;

use std::path::Path;
use std::sync::Arc;

pub use gateway::JobStoreGateway;
pub use mysql::MySqlJobStore;
pub use sqlite::{resolve_sqlite_url, SqliteJobStore};
pub use store::{JobStore, StoreBackend, StoreError};

use crate::core::config::DatabaseConfig;

/// Opens a pooled store for `database.url`, picking the backend by scheme.
/// A relative SQLite path is taken to live in `data_dir`.
pub async fn connect(
    config: &DatabaseConfig,
    data_dir: &Path,
) -> Result<Arc<dyn JobStore>, StoreError> {
    let backend = StoreBackend::from_url(&config.url).ok_or_else(|| {
        StoreError::Connection(format!("unsupported database url: {}", config.url))
    })?;

    let store: Arc<dyn JobStore> = match backend {
        StoreBackend::Sqlite => {
            let url = resolve_sqlite_url(&config.url, data_dir);
            Arc::new(
                SqliteJobStore::connect(&url, config.max_connections, config.bootstrap).await?,
            )
        }
        StoreBackend::MySql => {
            Arc::new(MySqlJobStore::connect(&config.url, config.max_connections).await?)
        }
    };

    tracing::info!("Job store ready (backend={})", store.backend().as_str());
    Ok(store)
}
