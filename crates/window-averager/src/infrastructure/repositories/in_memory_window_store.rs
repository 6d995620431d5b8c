use crate::application::ports::WindowStore;
use crate::domain::{Category, NumberWindow, WindowMerge};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Process-wide window storage, one lock per category
///
/// The category map is fixed at construction, so lookups never need a
/// lock of their own; only the window being merged is locked.
pub struct InMemoryWindowStore {
    windows: HashMap<Category, Mutex<NumberWindow>>,
    capacity: usize,
}

impl InMemoryWindowStore {
    pub fn new(capacity: usize) -> Self {
        let windows = Category::ALL
            .into_iter()
            .map(|category| (category, Mutex::new(NumberWindow::new(capacity))))
            .collect();

        InMemoryWindowStore {
            windows,
            capacity: capacity.max(1),
        }
    }

    fn window(&self, category: Category) -> &Mutex<NumberWindow> {
        // Every category is inserted in `new`
        &self.windows[&category]
    }
}

impl WindowStore for InMemoryWindowStore {
    fn merge_and_evict(&self, category: Category, candidates: &[i64]) -> WindowMerge {
        self.window(category).lock().merge(candidates)
    }

    fn snapshot(&self, category: Category) -> Vec<i64> {
        self.window(category).lock().to_vec()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
