//! WebSocket layer: upgrade handler and per-connection push loop.
//!
//! The endpoint at `/api/flashlight/ws` is server-to-client only: every
//! state change is pushed as a JSON text frame.

pub mod connection;
pub mod handler;
