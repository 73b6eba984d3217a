//! Flashlight endpoints: current state and live push.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::State as FlashlightState;
use crate::ws::handler::ws_handler;

/// `GET /api/flashlight/current_state` — Current flashlight state.
#[utoipa::path(
    get,
    path = "/api/flashlight/current_state",
    tag = "Flashlight",
    summary = "Current flashlight state",
    description = "Returns whether the flashlight is on and its CSS color. The same shape is pushed on `/api/flashlight/ws` after every change.",
    responses(
        (status = 200, description = "Current state", body = FlashlightState),
    )
)]
pub async fn current_state(State(state): State<AppState>) -> Json<FlashlightState> {
    Json(state.flashlight_service.current_state().await)
}

/// Flashlight routes, relative to [`crate::api::API_PREFIX`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/current_state", get(current_state))
        .route("/ws", get(ws_handler))
}
