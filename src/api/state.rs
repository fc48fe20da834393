//! Application State
//!
//! Shared state accessible by all handlers: the immutable dataset, the
//! filter cache over it, and the server configuration. The dataset is
//! injected at construction time and never reloaded.

use crate::cache::FilterCache;
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dataset loaded at startup, immutable for the process lifetime
    pub dataset: Arc<Dataset>,
    /// TTL-memoized country filter over the dataset
    pub cache: Arc<FilterCache>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create the application state around a loaded dataset.
    pub fn new(dataset: Arc<Dataset>, cache: Arc<FilterCache>, config: ApiConfig) -> Self {
        Self {
            dataset,
            cache,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
