//! View layer
//!
//! Pure builders for everything the dashboard page renders: Plotly figure
//! objects for the two chart panels and the style payload for the theme
//! toggle. Nothing here performs I/O; the HTTP callbacks in [`crate::api`]
//! feed these builders from the filter cache.

pub mod charts;
pub mod figure;
pub mod theme;

pub use charts::{case_map, line_chart};
pub use figure::{Figure, Layout, Marker, Trace};
pub use theme::{theme_styles, ThemeStyles, BACKGROUND_COLOR};
