//! SQLite-backed job store.
//!
//! Used for local development and tests. Only with `bootstrap` is a missing
//! file or `Job` table created; otherwise they surface as store errors. Extra
//! columns are discovered through `pragma_table_info`.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use super::store::{match_column, render_nullable, JobStore, StoreBackend, StoreError};

pub struct SqliteJobStore {
    pool: SqlitePool,
}

impl SqliteJobStore {
    pub async fn connect(
        url: &str,
        max_connections: u32,
        bootstrap: bool,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(bootstrap);
        let in_memory = url.contains(":memory:");
        let created = bootstrap && !in_memory && !options.get_filename().exists();

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        if created {
            tracing::warn!("Created new empty job database at {}", url);
        }

        let store = Self { pool };
        if bootstrap {
            store.init_schema().await?;
        }
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS Job (
                job_id INTEGER PRIMARY KEY,
                job_name TEXT NOT NULL,
                status TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn column_names(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SELECT name FROM pragma_table_info('Job')")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get::<String, _>("name")).collect())
    }
}

/// Anchors a relative `sqlite:` path in `base_dir`. Absolute paths,
/// `:memory:` and other schemes pass through unchanged.
pub fn resolve_sqlite_url(url: &str, base_dir: &Path) -> String {
    let Some(rest) = url.trim().strip_prefix("sqlite:") else {
        return url.to_string();
    };
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    if path.is_empty() || path == ":memory:" || Path::new(path).is_absolute() {
        return url.to_string();
    }

    let resolved = base_dir.join(path);
    match query {
        Some(query) => format!("sqlite://{}?{}", resolved.display(), query),
        None => format!("sqlite://{}", resolved.display()),
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl JobStore for SqliteJobStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Sqlite
    }

    async fn status_by_id(&self, job_id: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query(
            "SELECT CAST(status AS TEXT) AS status
             FROM Job
             WHERE job_id = ?1
             LIMIT 1",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| render_nullable(row.get("status"))))
    }

    async fn status_by_name(&self, name: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query(
            "SELECT CAST(status AS TEXT) AS status
             FROM Job
             WHERE job_name LIKE ?1
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
            "SELECT CAST({} AS TEXT) AS value FROM Job WHERE job_id = ?1 LIMIT 1",
            quote_identifier(column)
        );
        let row = sqlx::query(&query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| render_nullable(row.get("value"))))
    }
}
