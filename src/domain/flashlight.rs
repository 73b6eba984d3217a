//! Flashlight state and its wire snapshot.
//!
//! [`Flashlight`] is the server-side record mutated by commands. [`State`]
//! is what leaves the gateway: the HTTP current-state body and every
//! WebSocket push share this shape, and the display client parses it back.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FlashlightCommand;

/// Color the flashlight starts with before any `COLOR` command arrives.
pub const DEFAULT_COLOR: u32 = 0xdead_beef;

/// Server-side flashlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flashlight {
    /// Whether the light is on.
    pub is_turned_on: bool,
    /// Numeric color, rendered as hex in snapshots.
    pub color: u32,
}

impl Flashlight {
    /// Applies a validated command in place.
    pub fn apply(&mut self, command: FlashlightCommand) {
        match command {
            FlashlightCommand::On => self.is_turned_on = true,
            FlashlightCommand::Off => self.is_turned_on = false,
            FlashlightCommand::Color(color) => self.color = color,
        }
    }

    /// Returns the wire representation of the current state.
    #[must_use]
    pub fn snapshot(&self) -> State {
        State {
            is_turned_on: self.is_turned_on,
            color: css_color(self.color),
        }
    }
}

impl Default for Flashlight {
    fn default() -> Self {
        Self {
            is_turned_on: true,
            color: DEFAULT_COLOR,
        }
    }
}

/// Formats a numeric color as `#` plus lowercase hex, at least 6 digits.
#[must_use]
pub fn css_color(color: u32) -> String {
    format!("#{color:06x}")
}

/// Display status as sent over HTTP and WebSocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct State {
    /// Whether the light is on.
    #[schema(example = true)]
    pub is_turned_on: bool,
    /// CSS-compatible color value.
    #[schema(example = "#ff69b4")]
    pub color: String,
}

impl State {
    /// Creates a state record.
    #[must_use]
    pub fn new(is_turned_on: bool, color: impl Into<String>) -> Self {
        Self {
            is_turned_on,
            color: color.into(),
        }
    }
}
