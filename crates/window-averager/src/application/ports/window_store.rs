use crate::domain::{Category, WindowMerge};

/// Owner of the per-category number windows
///
/// All mutation goes through `merge_and_evict`, which must run atomically
/// with respect to other calls for the same category. Calls for different
/// categories must not contend with each other.
pub trait WindowStore: Send + Sync {
    /// Merge candidates into the category's window, evicting the oldest
    /// entries past capacity. Returns the contents before and after.
    fn merge_and_evict(&self, category: Category, candidates: &[i64]) -> WindowMerge;

    /// Copy of the category's current contents
    fn snapshot(&self, category: Category) -> Vec<i64>;

    fn capacity(&self) -> usize;
}
