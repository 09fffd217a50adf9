//! In-memory paper store for tests and local demos.

use std::sync::atomic::{AtomicBool, Ordering};

use super::PaperStore;
use crate::error::{StoreError, StoreResult};
use crate::models::PaperRow;

/// Rows held in memory, ordered like the Postgres listing.
#[derive(Debug)]
pub struct InMemoryStore {
    rows: Vec<PaperRow>,
    available: AtomicBool,
}

impl InMemoryStore {
    /// Reachable store holding `rows`.
    #[must_use]
    pub fn new(mut rows: Vec<PaperRow>) -> Self {
        // None sorts below Some, so descending order puts undated rows last
        rows.sort_by(|a, b| b.publication_year.cmp(&a.publication_year));

        Self { rows, available: AtomicBool::new(true) }
    }

    /// Store that fails every call as if the server were down.
    #[must_use]
    pub fn unavailable(rows: Vec<PaperRow>) -> Self {
        let store = Self::new(rows);
        store.set_available(false);
        store
    }

    /// Simulate the store going down or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::unavailable("in-memory store marked unavailable"))
        }
    }
}

#[async_trait::async_trait]
impl PaperStore for InMemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_all(&self) -> StoreResult<Vec<PaperRow>> {
        self.check()?;
        Ok(self.rows.clone())
    }

    async fn fetch_by_id(&self, work_id: &str) -> StoreResult<Option<PaperRow>> {
        self.check()?;
        Ok(self.rows.iter().find(|r| r.work_id == work_id).cloned())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}
