//! Paper store access.
//!
//! Backends implement [`PaperStore`] and report failures explicitly. The
//! [`Fetcher`] sits in front of a backend and applies the listing contract:
//! - listings degrade to an empty set when the store is unreachable
//! - lookups degrade to "not found"
//! - connectivity is reported separately through [`Fetcher::test_connection`]

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::{PostgresStore, coerce_year};

use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::PaperRow;

/// A source of paper rows.
#[async_trait::async_trait]
pub trait PaperStore: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// All rows with a title and abstract, newest publication year first.
    async fn fetch_all(&self) -> StoreResult<Vec<PaperRow>>;

    /// The row with this `work_id`, if any.
    async fn fetch_by_id(&self, work_id: &str) -> StoreResult<Option<PaperRow>>;

    /// Open and close a connection without querying.
    async fn ping(&self) -> StoreResult<()>;
}

/// Success message reported by the connectivity probe.
pub const CONNECTION_OK: &str = "Database connection successful";

/// Soft-failing front for a [`PaperStore`].
#[derive(Clone)]
pub struct Fetcher {
    store: Arc<dyn PaperStore>,
}

impl Fetcher {
    /// Wrap a store.
    #[must_use]
    pub fn new(store: Arc<dyn PaperStore>) -> Self {
        Self { store }
    }

    /// All rows, or the store failure that prevented reading them.
    pub async fn try_fetch_all(&self) -> StoreResult<Vec<PaperRow>> {
        let rows = self.store.fetch_all().await?;
        tracing::info!(store = self.store.name(), "Fetched {} papers", rows.len());
        Ok(rows)
    }

    /// All rows; an unreachable store yields an empty list.
    pub async fn fetch_all(&self) -> Vec<PaperRow> {
        match self.try_fetch_all().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(
                    store = self.store.name(),
                    unreachable = e.is_connectivity(),
                    error = %e,
                    "Database error"
                );
                Vec::new()
            }
        }
    }

    /// One row by id; any store failure is reported as "not found".
    pub async fn fetch_by_id(&self, work_id: &str) -> Option<PaperRow> {
        match self.store.fetch_by_id(work_id).await {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(
                    store = self.store.name(),
                    work_id,
                    unreachable = e.is_connectivity(),
                    error = %e,
                    "Database error"
                );
                None
            }
        }
    }

    /// Connectivity probe: `(connected, message)`.
    pub async fn test_connection(&self) -> (bool, String) {
        match self.store.ping().await {
            Ok(()) => (true, CONNECTION_OK.to_string()),
            Err(e) => {
                tracing::warn!(store = self.store.name(), error = %e, "Connectivity probe failed");
                (false, format!("Connection failed: {e}"))
            }
        }
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").field("store", &self.store.name()).finish()
    }
}
