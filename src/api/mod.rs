//! HTTP API layer: route handlers, OpenAPI document, and router composition.
//!
//! Flashlight endpoints are mounted under `/api/flashlight`; the page and
//! its script are served from the root.

pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Prefix shared by all flashlight endpoints.
pub const API_PREFIX: &str = "/api/flashlight";

/// Path of the current-state endpoint.
pub const CURRENT_STATE_PATH: &str = "/api/flashlight/current_state";

/// Path of the WebSocket push endpoint.
pub const PUSH_PATH: &str = "/api/flashlight/ws";

/// Builds the route tree without middleware.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest(API_PREFIX, handlers::flashlight::routes())
        .merge(handlers::assets::routes())
        .merge(handlers::system::routes())
        .merge(openapi::routes())
}

/// Builds the complete application: routes, tracing, timeout and CORS.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(build_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
