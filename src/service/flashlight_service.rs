//! Flashlight service: applies commands and emits snapshots.

use tokio::sync::RwLock;

use crate::domain::{EventBus, Flashlight, FlashlightCommand, State};

/// Orchestration layer for the flashlight.
///
/// Owns the [`Flashlight`] behind a lock and the [`EventBus`] it publishes
/// to. Every mutation follows the pattern: acquire lock, apply, snapshot,
/// release, emit.
#[derive(Debug)]
pub struct FlashlightService {
    flashlight: RwLock<Flashlight>,
    event_bus: EventBus,
}

impl FlashlightService {
    /// Creates a service starting from `flashlight`.
    #[must_use]
    pub fn new(flashlight: Flashlight, event_bus: EventBus) -> Self {
        Self {
            flashlight: RwLock::new(flashlight),
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a snapshot of the current state.
    pub async fn current_state(&self) -> State {
        self.flashlight.read().await.snapshot()
    }

    /// Applies `command` and broadcasts the resulting state.
    ///
    /// Publishes even when the command leaves the state unchanged.
    pub async fn apply(&self, command: FlashlightCommand) -> State {
        let mut flashlight = self.flashlight.write().await;
        flashlight.apply(command);
        let state = flashlight.snapshot();
        drop(flashlight);

        let receivers = self.event_bus.publish(state.clone());
        tracing::debug!(
            ?command,
            is_turned_on = state.is_turned_on,
            color = %state.color,
            receivers,
            "flashlight command applied"
        );
        state
    }
}
