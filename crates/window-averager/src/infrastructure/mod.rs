pub mod config;
pub mod repositories;
pub mod upstream;

pub use config::{ConfigError, ServiceConfig};
pub use repositories::InMemoryWindowStore;
pub use upstream::HttpNumberSource;
