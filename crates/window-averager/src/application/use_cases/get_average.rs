use crate::application::fetcher::UpstreamFetcher;
use crate::application::ports::{NumberSource, WindowStore};
use crate::domain::{Category, average};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct AverageResult {
    pub category: Category,
    /// Window before this request's merge
    pub previous: Vec<i64>,
    /// Window after this request's merge
    pub current: Vec<i64>,
    /// Raw upstream numbers, unfiltered and in upstream order
    pub numbers: Vec<i64>,
    /// Mean of `current`, two decimal places
    pub average: Decimal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AverageError {
    #[error("{reason}")]
    InvalidCategory { number_id: String, reason: String },
}

/// Fetch, merge and average for one category
pub struct GetAverageUseCase<S, W>
where
    S: NumberSource,
    W: WindowStore,
{
    fetcher: Arc<UpstreamFetcher<S>>,
    windows: Arc<W>,
}

impl<S, W> GetAverageUseCase<S, W>
where
    S: NumberSource,
    W: WindowStore,
{
    pub fn new(fetcher: Arc<UpstreamFetcher<S>>, windows: Arc<W>) -> Self {
        Self { fetcher, windows }
    }

    pub async fn execute(&self, number_id: &str) -> Result<AverageResult, AverageError> {
        // Reject before any upstream call or state change
        let category =
            Category::try_from(number_id).map_err(|reason| AverageError::InvalidCategory {
                number_id: number_id.to_string(),
                reason: reason.to_string(),
            })?;

        let numbers = self.fetcher.fetch_numbers(category).await;
        let merge = self.windows.merge_and_evict(category, &numbers);
        let average = average(&merge.current);

        tracing::debug!(
            %category,
            fetched = numbers.len(),
            window = merge.current.len(),
            %average,
            "Window updated"
        );

        Ok(AverageResult {
            category,
            previous: merge.previous,
            current: merge.current,
            numbers,
            average,
        })
    }
}
