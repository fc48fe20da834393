//! Covidash HTTP API
//!
//! The reactive half of the dashboard, built with Axum. Each Dash-style
//! callback is one POST route: the page sends its control state (theme
//! toggle, country selection) and gets back a figure or style object to
//! render.
//!
//! # Endpoints
//!
//! ## Callbacks
//! - `POST /api/v1/callbacks/line-chart` - Time-series figure
//! - `POST /api/v1/callbacks/map` - World bubble map figure
//! - `POST /api/v1/callbacks/theme` - Container/header styles
//!
//! ## Page
//! - `GET /` - The dashboard HTML shell
//! - `GET /api/v1/countries` - Multi-select options
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Callback routes, one per reactive handler
        .route(
            "/callbacks/line-chart",
            post(routes::charts::update_line_chart),
        )
        .route("/callbacks/map", post(routes::charts::update_map))
        .route("/callbacks/theme", post(routes::theme::toggle_theme))
        // Dropdown options
        .route("/countries", get(routes::countries::list_countries));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Covidash listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Covidash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FilterCache, DEFAULT_TTL};
    use crate::dataset::Dataset;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const TEST_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,1/24/20
,Afghanistan,33.9,67.7,0,0,5
,Canada,56.1,-106.3,1,2,3";

    fn create_test_app() -> Router {
        let dataset = Arc::new(Dataset::load_str(TEST_CSV).unwrap());
        let cache = Arc::new(FilterCache::new(Arc::clone(&dataset), DEFAULT_TTL));
        let state = AppState::new(dataset, cache, ApiConfig::default());
        build_router(state)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 6);
        assert_eq!(json["countries"], 2);
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_countries() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/countries")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["countries"][0], "Afghanistan");
        assert_eq!(json["total"], 2);
    }

    #[tokio::test]
    async fn test_line_chart_callback() {
        let app = create_test_app();

        let response = app
            .oneshot(json_post(
                "/api/v1/callbacks/line-chart",
                r#"{"theme": [], "countries": ["Canada"]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["name"], "Canada");
    }

    #[tokio::test]
    async fn test_line_chart_callback_no_selection() {
        let app = create_test_app();

        let response = app
            .oneshot(json_post("/api/v1/callbacks/line-chart", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_map_callback() {
        let app = create_test_app();

        let response = app
            .oneshot(json_post("/api/v1/callbacks/map", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // Both countries report on the latest date
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["type"], "scattergeo");
    }

    #[tokio::test]
    async fn test_theme_callback() {
        let app = create_test_app();

        let response = app
            .oneshot(json_post(
                "/api/v1/callbacks/theme",
                r#"{"theme": ["dark"]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["container"]["color"], "white");
        assert_eq!(json["container"]["backgroundColor"], "#99d6ff");
    }

    #[tokio::test]
    async fn test_callback_invalid_json() {
        let app = create_test_app();

        let response = app
            .oneshot(json_post("/api/v1/callbacks/line-chart", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
