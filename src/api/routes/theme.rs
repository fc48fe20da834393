//! Theme callback route
//!
//! - POST /api/v1/callbacks/theme - Container and header styles

use axum::Json;

use crate::api::dto::CallbackRequest;
use crate::view::theme::{theme_styles, ThemeStyles};

/// POST /api/v1/callbacks/theme
///
/// Pure style computation from the toggle value; no data access.
pub async fn toggle_theme(Json(req): Json<CallbackRequest>) -> Json<ThemeStyles> {
    Json(theme_styles(&req.theme))
}
