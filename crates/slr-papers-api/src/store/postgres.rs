//! PostgreSQL paper store.
//!
//! A connection is opened and closed inside every call. There is no pool:
//! request volume is low and nothing outlives a single fetch.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, FromRow};

use super::PaperStore;
use crate::config::DatabaseConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::PaperRow;

/// Row as selected: every column cast to text so loosely typed tables decode.
#[derive(Debug, FromRow)]
struct RawPaperRow {
    work_id: String,
    title: String,
    abstract_text: String,
    doi: Option<String>,
    authorships: Option<String>,
    publication_year: Option<String>,
    output: Option<String>,
}

impl From<RawPaperRow> for PaperRow {
    fn from(raw: RawPaperRow) -> Self {
        Self {
            work_id: raw.work_id,
            title: raw.title,
            r#abstract: raw.abstract_text,
            doi: raw.doi,
            authorships: raw.authorships,
            publication_year: raw.publication_year.as_deref().and_then(coerce_year),
            output: raw.output,
        }
    }
}

/// Coerce a stored year (`"2021"`, `"2021.0"`, `" 2021 "`) to an integer.
#[must_use]
pub fn coerce_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let year = raw.parse::<f64>().ok()?;
    if year.is_finite() && year >= f64::from(i32::MIN) && year <= f64::from(i32::MAX) {
        Some(year.trunc() as i32)
    } else {
        None
    }
}

/// Accept `table` or `schema.table` made of plain SQL identifiers.
fn validate_table_name(table: &str) -> StoreResult<()> {
    let valid_part = |part: &str| {
        let mut chars = part.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    if !table.is_empty() && table.split('.').count() <= 2 && table.split('.').all(valid_part) {
        Ok(())
    } else {
        Err(StoreError::invalid_config(format!("invalid table name {table:?}")))
    }
}

/// Store backed by one Postgres table.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    options: PgConnectOptions,
    connect_timeout: Duration,
    list_sql: String,
    by_id_sql: String,
}

impl PostgresStore {
    /// Build a store from connection settings. Nothing is opened yet.
    ///
    /// # Errors
    ///
    /// Returns error if the configured table name is not a plain identifier.
    pub fn new(config: &DatabaseConfig) -> StoreResult<Self> {
        validate_table_name(&config.table)?;

        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .database(&config.database);
        if !config.password.is_empty() {
            options = options.password(&config.password);
        }

        let select = format!(
            "SELECT work_id::text AS work_id, \
                    COALESCE(title::text, '') AS title, \
                    COALESCE(abstract::text, '') AS abstract_text, \
                    doi::text AS doi, \
                    authorships::text AS authorships, \
                    publication_year::text AS publication_year, \
                    output::text AS output \
             FROM {}",
            config.table
        );

        Ok(Self {
            options,
            connect_timeout: config.connect_timeout,
            list_sql: format!(
                "{select} WHERE work_id IS NOT NULL AND title IS NOT NULL AND abstract IS NOT NULL \
                 ORDER BY publication_year DESC NULLS LAST"
            ),
            // Compare the bare column so an index on work_id stays usable
            by_id_sql: format!("{select} WHERE work_id = $1 LIMIT 1"),
        })
    }

    async fn connect(&self) -> StoreResult<PgConnection> {
        match tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&self.options))
            .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(StoreError::Connection(e)),
            Err(_) => Err(StoreError::unavailable(format!(
                "connection timed out after {:?}",
                self.connect_timeout
            ))),
        }
    }

    async fn close(conn: PgConnection) {
        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "Error closing database connection");
        }
    }
}

#[async_trait::async_trait]
impl PaperStore for PostgresStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn fetch_all(&self) -> StoreResult<Vec<PaperRow>> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, RawPaperRow>(&self.list_sql).fetch_all(&mut conn).await;
        Self::close(conn).await;

        Ok(result?.into_iter().map(PaperRow::from).collect())
    }

    async fn fetch_by_id(&self, work_id: &str) -> StoreResult<Option<PaperRow>> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, RawPaperRow>(&self.by_id_sql)
            .bind(work_id)
            .fetch_optional(&mut conn)
            .await;
        Self::close(conn).await;

        Ok(result?.map(PaperRow::from))
    }

    async fn ping(&self) -> StoreResult<()> {
        let conn = self.connect().await?;
        Self::close(conn).await;
        Ok(())
    }
}
