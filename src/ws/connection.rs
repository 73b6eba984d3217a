//! Push loop for a single WebSocket connection.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::State;

/// Text frame a client may send to end its subscription.
pub const CLOSE_COMMAND: &str = "close";

/// Runs the push loop for a single WebSocket connection.
///
/// - Forwards every [`State`] from the [`broadcast::Receiver`] as JSON.
/// - Ends on a Close frame, a `"close"` text frame, or a send failure.
/// - Any other client message is ignored.
pub async fn run_connection(
    socket: WebSocket,
    mut state_rx: broadcast::Receiver<State>,
    connection_id: Uuid,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) if text.as_str() == CLOSE_COMMAND => break,
                    Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                    _ => {}
                }
            }
            // Snapshot from EventBus
            state = state_rx.recv() => {
                match state {
                    Ok(state) => {
                        let json = match serde_json::to_string(&state) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!(%connection_id, error = %e, "failed to encode state");
                                continue;
                            }
                        };
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(%connection_id, lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!(%connection_id, "websocket connection finished");
}
