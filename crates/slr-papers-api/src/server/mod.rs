//! HTTP server for the papers API.
//!
//! The two services (row fetcher and facet filter) are built once here and
//! handed to the router as explicit state.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::facets::FacetFilter;
use crate::store::{Fetcher, PaperStore};

pub use routes::{AppState, CountResponse, HealthResponse, create_router};

/// Papers API server.
pub struct ApiServer {
    fetcher: Fetcher,
    facets: FacetFilter,
}

impl ApiServer {
    /// Create a server over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PaperStore>) -> Self {
        Self { fetcher: Fetcher::new(store), facets: FacetFilter::new() }
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        create_router(self.fetcher.clone(), self.facets)
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error if the address cannot be bound or the server fails.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();

        let (connected, message) = self.fetcher.test_connection().await;
        if connected {
            tracing::info!("{}", message);
        } else {
            tracing::warn!("{}; listings will be empty until the database is reachable", message);
        }

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// The row fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}

impl std::fmt::Debug for ApiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiServer").field("fetcher", &self.fetcher).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for CTRL+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
