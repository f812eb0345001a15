use std::sync::Arc;

use super::store::{JobStore, StoreError};

/// Sentence-level facade over a [`JobStore`].
///
/// Every operation answers with text ready for the response synthesizer,
/// including the "not found" cases. Store failures are returned as errors and
/// never turned into a "not found" sentence.
#[derive(Clone)]
pub struct JobStoreGateway {
    store: Arc<dyn JobStore>,
}

impl JobStoreGateway {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    pub async fn status_by_job_id(&self, job_id: &str) -> Result<String, StoreError> {
        match self.store.status_by_id(job_id).await? {
            Some(status) => Ok(format!(
                "The status of the job with job_id {} is: {}",
                job_id, status
            )),
            None => Ok(job_id_not_found(job_id)),
        }
    }

    /// Unanchored "contains" match; with several hits the first row the store
    /// returns wins.
    pub async fn status_by_job_name(&self, job_name: &str) -> Result<String, StoreError> {
        match self.store.status_by_name(job_name).await? {
            Some(status) => Ok(format!(
                "The status of the job '{}' is: {}",
                job_name, status
            )),
            None => Ok(format!("No job found with the name '{}'.", job_name)),
        }
    }

    /// Checks the schema before touching any row, so an unknown column never
    /// reaches the value query.
    pub async fn column_value(&self, job_id: &str, column: &str) -> Result<String, StoreError> {
        let Some(resolved) = self.store.resolve_column(column).await? else {
            return Ok(format!(
                "The column '{}' does not exist in the Job table.",
                column
            ));
        };

        match self.store.column_value(&resolved, job_id).await? {
            Some(value) => Ok(format!(
                "The value of '{}' for job with job_id {} is: {}",
                column, job_id, value
            )),
            None => Ok(job_id_not_found(job_id)),
        }
    }
}

fn job_id_not_found(job_id: &str) -> String {
    format!("No job found with job_id {}.", job_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::testing::FakeJobStore;

    fn gateway(store: &Arc<FakeJobStore>) -> JobStoreGateway {
        JobStoreGateway::new(store.clone())
    }

    #[tokio::test]
    async fn status_by_id_found_and_missing() {
        let store = Arc::new(FakeJobStore::with_jobs(&[("7", "nightly-etl", "running")]));
        let gateway = gateway(&store);

        assert_eq!(
            gateway.status_by_job_id("7").await.unwrap(),
            "The status of the job with job_id 7 is: running"
        );
        assert_eq!(
            gateway.status_by_job_id("999").await.unwrap(),
            "No job found with job_id 999."
        );
    }

    #[tokio::test]
    async fn status_by_name_uses_contains_match() {
        let store = Arc::new(FakeJobStore::with_jobs(&[("7", "nightly-etl", "running")]));
        let gateway = gateway(&store);

        assert_eq!(
            gateway.status_by_job_name("etl").await.unwrap(),
            "The status of the job 'etl' is: running"
        );
        assert_eq!(
            gateway.status_by_job_name("payroll").await.unwrap(),
            "No job found with the name 'payroll'."
        );
    }

    #[tokio::test]
    async fn unknown_column_skips_value_query() {
        let store = Arc::new(FakeJobStore::with_jobs(&[("7", "nightly-etl", "running")]));
        let gateway = gateway(&store);

        let message = gateway.column_value("7", "shoe_size").await.unwrap();
        assert_eq!(
            message,
            "The column 'shoe_size' does not exist in the Job table."
        );
        assert_eq!(store.calls("resolve_column"), 1);
        assert_eq!(store.calls("column_value"), 0);
    }

    #[tokio::test]
    async fn known_column_reports_value_or_missing_row() {
        let store = Arc::new(
            FakeJobStore::with_jobs(&[("7", "nightly-etl", "running")])
                .with_column("owner", &[("7", Some("ops"))]),
        );
        let gateway = gateway(&store);

        assert_eq!(
            gateway.column_value("7", "OWNER").await.unwrap(),
            "The value of 'OWNER' for job with job_id 7 is: ops"
        );
        assert_eq!(
            gateway.column_value("8", "owner").await.unwrap(),
            "No job found with job_id 8."
        );
    }

    #[tokio::test]
    async fn store_failure_is_not_masked() {
        let store = Arc::new(FakeJobStore::failing());
        let gateway = gateway(&store);

        assert!(gateway.status_by_job_id("7").await.is_err());
        assert!(gateway.status_by_job_name("etl").await.is_err());
        assert!(gateway.column_value("7", "status").await.is_err());
    }
}
