//! # Covidash
//!
//! A single-dataset COVID-19 dashboard service. One CSV of cumulative
//! confirmed cases is loaded at startup, melted from wide to long form,
//! and served through Dash-style HTTP callbacks: the page posts its
//! control state and gets back Plotly figure or style objects to render.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the long-form record model
//! - [`filter`]: Pure country filter over the dataset
//! - [`cache`]: TTL-memoized filter results
//! - [`view`]: Figure and style builders (the pure half of the view layer)
//! - [`api`]: Callback, page and health routes with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use covidash::api::{serve, ApiConfig, AppState};
//! use covidash::cache::{FilterCache, DEFAULT_TTL};
//! use covidash::dataset::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load(Path::new(
//!         "time_series_covid19_confirmed_global.csv",
//!     ))?);
//!     let cache = Arc::new(FilterCache::new(Arc::clone(&dataset), DEFAULT_TTL));
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(dataset, cache, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod view;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};
pub use cache::{FilterCache, DEFAULT_TTL};
pub use config::{Config, ConfigError};
pub use dataset::{CaseRecord, Dataset, DatasetError, DatasetResult, ParsedDate};
pub use filter::filter;
pub use view::{case_map, line_chart, theme_styles, Figure, ThemeStyles};
