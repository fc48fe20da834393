//! Chart callback routes
//!
//! One handler per chart panel. Each pulls the selection's subset from the
//! memoized filter cache and hands it to the pure builders in
//! [`crate::view::charts`].
//!
//! - POST /api/v1/callbacks/line-chart - Time-series line chart figure
//! - POST /api/v1/callbacks/map - World bubble map figure

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CallbackRequest;
use crate::api::state::AppState;
use crate::view::charts;
use crate::view::figure::Figure;

/// POST /api/v1/callbacks/line-chart
///
/// Re-fires whenever the theme toggle or the country selection changes.
/// Windows on the filtered subset's own latest date; an empty subset
/// produces a figure with zero traces.
pub async fn update_line_chart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> Json<Figure> {
    let records = state.cache.get_filtered(req.selection()).await;
    Json(charts::line_chart(&records))
}

/// POST /api/v1/callbacks/map
///
/// Pins to the latest date of the full dataset, not the filtered subset,
/// so a selection with no rows on that date renders an empty map while
/// the line chart still shows the subset's own range.
pub async fn update_map(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> Json<Figure> {
    let records = state.cache.get_filtered(req.selection()).await;
    Json(charts::case_map(&records, state.dataset.latest_date()))
}
