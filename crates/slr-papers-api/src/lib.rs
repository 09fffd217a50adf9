//! SLR Papers API
//!
//! HTTP backend over a single curated table of biomedical research papers.
//! Rows are listed, looked up by `work_id`, and filtered by facets derived
//! from each row's classification blob.
//!
//! # Features
//!
//! - **Facets**: study type, trial phase and pharma group, recomputed per request
//! - **Filtering**: OR within a category, AND across categories
//! - **Soft-failing store**: an unreachable database yields empty listings,
//!   reported through the health endpoint
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use slr_papers_api::{config::Config, server::ApiServer, store::PostgresStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let store = PostgresStore::new(&config.database)?;
//!     let server = ApiServer::new(Arc::new(store));
//!
//!     server.run_http(([0, 0, 0, 0], 8000).into()).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod facets;
pub mod formatters;
pub mod models;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::{ApiError, StoreError};
pub use facets::FacetFilter;
pub use store::Fetcher;
