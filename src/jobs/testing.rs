//! In-memory `JobStore` for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::store::{match_column, render_nullable, JobStore, StoreBackend, StoreError};

#[derive(Default)]
pub struct FakeJobStore {
    columns: Vec<String>,
    rows: Vec<HashMap<String, Option<String>>>,
    fail: bool,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl FakeJobStore {
    /// Rows of `(job_id, job_name, status)`.
    pub fn with_jobs(jobs: &[(&str, &str, &str)]) -> Self {
        let rows = jobs
            .iter()
            .map(|(id, name, status)| {
                HashMap::from([
                    ("job_id".to_string(), Some(id.to_string())),
                    ("job_name".to_string(), Some(name.to_string())),
                    ("status".to_string(), Some(status.to_string())),
                ])
            })
            .collect();

        Self {
            columns: vec![
                "job_id".to_string(),
                "job_name".to_string(),
                "status".to_string(),
            ],
            rows,
            ..Self::default()
        }
    }

    /// Adds a column; rows not listed get `NULL`.
    pub fn with_column(mut self, column: &str, values: &[(&str, Option<&str>)]) -> Self {
        self.columns.push(column.to_string());
        for row in &mut self.rows {
            let job_id = row.get("job_id").cloned().flatten().unwrap_or_default();
            let value = values
                .iter()
                .find(|(id, _)| *id == job_id)
                .and_then(|(_, value)| value.map(str::to_string));
            row.insert(column.to_string(), value);
        }
        self
    }

    /// Every call fails as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, operation: &'static str) -> Result<(), StoreError> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        if self.fail {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        Ok(())
    }

    fn find_row(&self, job_id: &str) -> Option<&HashMap<String, Option<String>>> {
        self.rows
            .iter()
            .find(|row| row.get("job_id").cloned().flatten().as_deref() == Some(job_id))
    }
}

#[async_trait]
impl JobStore for FakeJobStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Sqlite
    }

    async fn status_by_id(&self, job_id: &str) -> Result<Option<String>, StoreError> {
        self.record("status_by_id")?;
        Ok(self
            .find_row(job_id)
            .map(|row| render_nullable(row.get("status").cloned().flatten())))
    }

    async fn status_by_name(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.record("status_by_name")?;
        let needle = name.to_lowercase();
        Ok(self
            .rows
            .iter()
            .find(|row| {
                row.get("job_name")
                    .cloned()
                    .flatten()
                    .map(|job_name| job_name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .map(|row| render_nullable(row.get("status").cloned().flatten())))
    }

    async fn resolve_column(&self, column: &str) -> Result<Option<String>, StoreError> {
        self.record("resolve_column")?;
        Ok(match_column(&self.columns, column))
    }

    async fn column_value(
        &self,
        column: &str,
        job_id: &str,
    ) -> Result<Option<String>, StoreError> {
        self.record("column_value")?;
        Ok(self
            .find_row(job_id)
            .map(|row| render_nullable(row.get(column).cloned().flatten())))
    }
}
