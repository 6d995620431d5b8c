use crate::application::ports::NumberSource;
use crate::domain::{Category, FetchOutcome};
use std::sync::Arc;
use std::time::Duration;

/// Per-call upstream deadline used when none is configured
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(500);

/// Bounded-latency wrapper around a [`NumberSource`]
///
/// Every call is a single attempt tied to its own deadline. When the
/// deadline passes the in-flight source future is dropped, cancelling it.
pub struct UpstreamFetcher<S: NumberSource> {
    source: Arc<S>,
    timeout: Duration,
}

impl<S: NumberSource> UpstreamFetcher<S> {
    pub fn new(source: Arc<S>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn with_default_timeout(source: Arc<S>) -> Self {
        Self::new(source, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one upstream call under the deadline
    pub async fn fetch(&self, category: Category) -> FetchOutcome {
        match tokio::time::timeout(self.timeout, self.source.fetch(category)).await {
            Ok(Ok(numbers)) => FetchOutcome::Fetched(numbers),
            Ok(Err(e)) => FetchOutcome::Failed(e),
            Err(_) => FetchOutcome::TimedOut,
        }
    }

    /// Numbers reported upstream, or none if the call failed in any way
    pub async fn fetch_numbers(&self, category: Category) -> Vec<i64> {
        let outcome = self.fetch(category).await;
        match &outcome {
            FetchOutcome::Fetched(numbers) => {
                tracing::debug!(%category, count = numbers.len(), "Fetched upstream numbers");
            }
            FetchOutcome::TimedOut => {
                tracing::warn!(
                    %category,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Upstream request timed out"
                );
            }
            FetchOutcome::Failed(e) => {
                tracing::error!(%category, error = %e, "Upstream request failed");
            }
        }
        outcome.into_numbers()
    }
}
