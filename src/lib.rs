//! # flashlight-gateway
//!
//! HTTP and WebSocket gateway for a remotely commanded flashlight, plus the
//! display client that renders its state.
//!
//! The gateway reads `ON` / `OFF` / `COLOR` commands from a TCP command
//! feed, keeps the current flashlight state, serves it over HTTP and pushes
//! every change to WebSocket subscribers. The display client fetches the
//! current state once, then follows the push channel.
//!
//! ## Architecture
//!
//! ```text
//! Command feed (TCP)
//!     │
//!     ├── CommandFeed (feed/), run next to the server (gateway)
//!     │
//!     ├── FlashlightService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     ├── HTTP Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     └── StateDisplay client (display/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod feed;
pub mod gateway;
pub mod service;
pub mod ws;
