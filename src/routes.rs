//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (storage connectivity)
//! - `/students/*`       - Student CRUD API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(service_router(state))
}

/// Routes and tracing without path normalization.
pub fn service_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/students", api::routes::student_routes())
        .with_state(state)
        .layer(tracing::layer())
}
