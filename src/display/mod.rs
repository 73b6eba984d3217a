//! Display client: renders the flashlight state and keeps it live.
//!
//! The element to draw on is handed to [`StateDisplay::new`]; states arrive
//! through one queue and are rendered by one loop.

pub mod element;
pub mod state_display;

pub use element::{ConsoleElement, DisplayElement, RecordingElement};
pub use state_display::{Endpoints, StateDisplay, display_text};
