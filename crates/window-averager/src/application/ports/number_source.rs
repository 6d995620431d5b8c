use crate::domain::{Category, FetchError};
use async_trait::async_trait;

/// Upstream generator of numbers for each category
///
/// Implementations perform a single call and report what the upstream
/// returned. Deadlines are enforced by the caller, which drops the future
/// once it expires.
#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn fetch(&self, category: Category) -> Result<Vec<i64>, FetchError>;
}
