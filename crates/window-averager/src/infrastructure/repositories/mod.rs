mod in_memory_window_store;

pub use in_memory_window_store::InMemoryWindowStore;
