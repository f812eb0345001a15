//! MySQL/MariaDB-backed job store, the production deployment target.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use super::store::{match_column, render_nullable, JobStore, StoreBackend, StoreError};

pub struct MySqlJobStore {
    pool: MySqlPool,
}

impl MySqlJobStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    async fn column_names(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SHOW COLUMNS FROM Job")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(field_name).collect()
    }
}

/// `SHOW COLUMNS` reports `Field` as text on MariaDB and as binary on some
/// MySQL versions.
fn field_name(row: &MySqlRow) -> Result<String, StoreError> {
    if let Ok(name) = row.try_get::<String, _>("Field") {
        return Ok(name);
    }
    let bytes: Vec<u8> = row.try_get("Field")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

#[async_trait]
impl JobStore for MySqlJobStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::MySql
    }

    async fn status_by_id(&self, job_id: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query(
            "SELECT CAST(status AS CHAR) AS status
             FROM Job
             WHERE job_id = ?
             LIMIT 1",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| render_nullable(row.get("status"))))
    }

    async fn status_by_name(&self, name: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query(
            "SELECT CAST(status AS CHAR) AS status
             FROM Job
             WHERE job_name LIKE ?
             LIMIT 1",
        )
        .bind(format!("%{}%", name))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| render_nullable(row.get("status"))))
    }

    async fn resolve_column(&self, column: &str) -> Result<Option<String>, StoreError> {
        let columns = self.column_names().await?;
        Ok(match_column(&columns, column))
    }

    async fn column_value(
        &self,
        column: &str,
        job_id: &str,
    ) -> Result<Option<String>, StoreError> {
        let query = format!(
            "SELECT CAST({} AS CHAR) AS value FROM Job WHERE job_id = ? LIMIT 1",
            quote_identifier(column)
        );
        let row = sqlx::query(&query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| render_nullable(row.get("value"))))
    }
}
