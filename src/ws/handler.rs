//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /api/flashlight/ws` — Upgrade HTTP connection to WebSocket.
///
/// The subscription is taken before the upgrade completes, so no change
/// published after the handshake can be missed.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let state_rx = state.event_bus.subscribe();
    let connection_id = uuid::Uuid::new_v4();
    tracing::debug!(%connection_id, "websocket connection starting");

    ws.on_upgrade(move |socket| run_connection(socket, state_rx, connection_id))
}
