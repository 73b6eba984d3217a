//! Domain layer: flashlight state, feed commands, and the event bus.

pub mod command;
pub mod event_bus;
pub mod flashlight;

pub use command::{Command, CommandType, FlashlightCommand, decode_command};
pub use event_bus::EventBus;
pub use flashlight::{Flashlight, State};
