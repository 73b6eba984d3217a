//! Service layer: business logic orchestration.
//!
//! [`FlashlightService`] applies feed commands to the flashlight and emits
//! snapshots through the [`super::domain::EventBus`].

pub mod flashlight_service;

pub use flashlight_service::FlashlightService;
