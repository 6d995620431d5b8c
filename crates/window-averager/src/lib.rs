//! Window Averager
//!
//! Keeps, per number category, a bounded window of recently observed values
//! pulled from an upstream generator and reports the running average.
//!
//! # Architecture
//!
//! - **Domain**: `Category`, `NumberWindow` (merge-and-evict), averaging, fetch outcomes
//! - **Application**: `NumberSource`/`WindowStore` ports, the deadline-bound
//!   `UpstreamFetcher`, and the `GetAverageUseCase` orchestrating one request
//! - **Infrastructure**: `InMemoryWindowStore`, `HttpNumberSource`, JSON configuration
//! - **Presentation**: REST API (`/numbers/{number_id}`, `/health`)
//!
//! # Example
//!
//! ```ignore
//! use window_averager::{Averager, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let averager = Averager::new(ServiceConfig::default()).unwrap();
//!     averager.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::{Category, FetchError, FetchOutcome, NumberWindow, WindowMerge, average};

pub use infrastructure::{ConfigError, HttpNumberSource, InMemoryWindowStore, ServiceConfig};

pub use application::{
    AverageError, AverageResult, GetAverageUseCase, NumberSource, UpstreamFetcher, WindowStore,
};

pub use presentation::{AppState, create_router};

use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The averaging service
pub struct Averager {
    pub config: ServiceConfig,
    pub fetcher: Arc<UpstreamFetcher<HttpNumberSource>>,
    pub windows: Arc<InMemoryWindowStore>,
}

impl Averager {
    /// Build the service from a validated configuration
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let timeout = config.upstream.timeout();
        let source = Arc::new(HttpNumberSource::new(
            config.upstream.endpoints.clone(),
            config.upstream.access_token.clone(),
            timeout,
        )?);
        let fetcher = Arc::new(UpstreamFetcher::new(source, timeout));
        let windows = Arc::new(InMemoryWindowStore::new(config.window.capacity));

        Ok(Averager {
            config,
            fetcher,
            windows,
        })
    }

    /// Create the REST API router
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.fetcher),
            Arc::clone(&self.windows),
        ));

        create_router(state)
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr();
        let router = self.router();

        tracing::info!(
            capacity = self.windows.capacity(),
            timeout_ms = self.fetcher.timeout().as_millis() as u64,
            "Window averager listening on {}",
            addr
        );

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Window averager stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
