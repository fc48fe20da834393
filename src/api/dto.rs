//! Data Transfer Objects
//!
//! Request and response types for the callback and utility endpoints.

use serde::{Deserialize, Serialize};

/// Inputs of a dashboard callback, mirroring the page's control state.
///
/// Every callback posts the same body: the theme toggle value and the
/// country multi-select value. The chart callbacks re-fire on theme
/// changes too, so the theme field is accepted (and ignored) there.
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    /// Theme toggle value: empty, or containing "dark"
    #[serde(default)]
    pub theme: Vec<String>,
    /// Selected countries; absent or null means "no filter"
    #[serde(default)]
    pub countries: Option<Vec<String>>,
}

impl CallbackRequest {
    /// The country selection as a filter argument; absent means empty.
    pub fn selection(&self) -> &[String] {
        self.countries.as_deref().unwrap_or(&[])
    }
}

/// Country multi-select options
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    /// Unique country names in dataset order
    pub countries: Vec<String>,
    /// Total count
    pub total: usize,
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: always "healthy" once serving
    pub status: String,
    /// Long-form records loaded at startup
    pub records: usize,
    /// Distinct countries in the dataset
    pub countries: usize,
    /// Distinct selections currently memoized
    pub cache_entries: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
