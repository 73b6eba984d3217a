//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::service::FlashlightService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Flashlight service holding the current state.
    pub flashlight_service: Arc<FlashlightService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

impl AppState {
    /// Builds the state around `flashlight_service`, sharing its bus.
    #[must_use]
    pub fn new(flashlight_service: Arc<FlashlightService>) -> Self {
        let event_bus = flashlight_service.event_bus().clone();
        Self {
            flashlight_service,
            event_bus,
        }
    }
}
