//! OpenAPI document for the JSON endpoints.
//!
//! Served as `/api-docs/openapi.json`; with the `swagger-ui` feature the
//! interactive UI is mounted at `/swagger-ui` as well.

use axum::Router;
use utoipa::OpenApi;

use super::handlers;
use crate::app_state::AppState;

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "flashlight-gateway",
        description = "Current state and live push for a remotely commanded flashlight."
    ),
    paths(
        handlers::flashlight::current_state,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Flashlight", description = "Flashlight state"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Path the JSON document is served on.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Documentation routes.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()))
}

/// Documentation routes.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
