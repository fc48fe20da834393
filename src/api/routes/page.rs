//! Dashboard page route
//!
//! - GET / - The static HTML shell
//!
//! The page is the client half of the callback loop: it populates the
//! country multi-select from `/api/v1/countries`, posts control state to
//! the callback routes on every change, and renders the returned figure
//! and style objects with Plotly.js.

use axum::response::Html;

/// GET /
///
/// Serve the dashboard shell, compiled into the binary.
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../../demos/dashboard.html"))
}
