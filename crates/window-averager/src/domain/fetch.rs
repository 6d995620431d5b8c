use super::Category;
use thiserror::Error;

/// Why an upstream source produced no numbers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS or transport failure
    #[error("Network error: {0}")]
    Network(String),
    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}")]
    Status { status: u16 },
    /// Body was not `{"numbers": [int, ...]}`
    #[error("Malformed payload: {0}")]
    Malformed(String),
    /// No upstream endpoint configured for the category
    #[error("No upstream bound to category {category}")]
    Unbound { category: Category },
}

/// Result of one bounded upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Numbers exactly as reported upstream, duplicates and order preserved
    Fetched(Vec<i64>),
    /// Deadline elapsed before the upstream answered
    TimedOut,
    Failed(FetchError),
}

impl FetchOutcome {
    /// Numbers contributed by this call; every failure branch contributes none
    pub fn into_numbers(self) -> Vec<i64> {
        match self {
            FetchOutcome::Fetched(numbers) => numbers,
            FetchOutcome::TimedOut | FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_collapse_to_empty() {
        assert!(FetchOutcome::TimedOut.into_numbers().is_empty());
        assert!(
            FetchOutcome::Failed(FetchError::Status { status: 503 })
                .into_numbers()
                .is_empty()
        );
    }

    #[test]
    fn test_fetched_numbers_are_verbatim() {
        let outcome = FetchOutcome::Fetched(vec![3, 1, 3]);
        assert_eq!(outcome.into_numbers(), vec![3, 1, 3]);
    }
}
