//! Configuration loading for the window averager
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock service: port 9876, windows of 10, 500ms upstream
//! deadline, bound to the evaluation-service generators.

use crate::domain::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_UPSTREAM_BASE: &str = "http://20.244.56.144/evaluation-service";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9876
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Maximum numbers retained per category
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    10
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Deadline for a single upstream call
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Bearer token sent to every upstream source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Source URL per category
    #[serde(default = "default_endpoints")]
    pub endpoints: BTreeMap<Category, String>,
}

fn default_timeout_ms() -> u64 {
    500
}

fn default_endpoints() -> BTreeMap<Category, String> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let path = match category {
                Category::Prime => "primes",
                Category::Fibonacci => "fibbo",
                Category::Even => "even",
                Category::Random => "rand",
            };
            (category, format!("{}/{}", DEFAULT_UPSTREAM_BASE, path))
        })
        .collect()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            access_token: None,
            endpoints: default_endpoints(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `UPSTREAM_ACCESS_TOKEN` overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring unparseable PORT value: {}", port),
            }
        }
        if let Ok(token) = std::env::var("UPSTREAM_ACCESS_TOKEN") {
            self.upstream.access_token = Some(token);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.capacity == 0 {
            return Err(ConfigError::Invalid(
                "window.capacity must be at least 1".to_string(),
            ));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "upstream.timeout_ms must be positive".to_string(),
            ));
        }
        if let Some(missing) = Category::ALL
            .into_iter()
            .find(|c| !self.upstream.endpoints.contains_key(c))
        {
            return Err(ConfigError::Invalid(format!(
                "no upstream endpoint for category {}",
                missing
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
