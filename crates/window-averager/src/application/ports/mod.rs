mod number_source;
mod window_store;

pub use number_source::NumberSource;
pub use window_store::WindowStore;
