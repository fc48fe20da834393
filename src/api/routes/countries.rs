//! Country list route
//!
//! - GET /api/v1/countries - Options for the page's multi-select

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CountriesResponse;
use crate::api::state::AppState;

/// GET /api/v1/countries
///
/// Unique country names in dataset order, for the dropdown options.
pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<CountriesResponse> {
    let countries = state.dataset.countries();
    let total = countries.len();
    Json(CountriesResponse { countries, total })
}
