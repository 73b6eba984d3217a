//! Configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Each binary loads only its own block:
//! [`GatewayConfig`], [`MockConfig`] or [`DisplayConfig`].

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::FlashlightError;

/// Gateway server configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Host of the remote command feed.
    pub commands_host: String,

    /// Port of the remote command feed.
    pub commands_port: u16,

    /// Total number of feed connections to make before giving up.
    pub commands_max_reconnect_tries: u32,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Seconds before an HTTP request is aborted.
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    ///
    /// # Errors
    ///
    /// Returns [`FlashlightError::InvalidConfig`] if `LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, FlashlightError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            listen_addr: parse_addr("LISTEN_ADDR", "0.0.0.0:3000")?,
            commands_host: std::env::var("COMMANDS_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            commands_port: parse_env("COMMANDS_PORT", 9999),
            commands_max_reconnect_tries: parse_env("COMMANDS_MAX_RECONNECT_TRIES", 5),
            event_bus_capacity: parse_env("EVENT_BUS_CAPACITY", 1024),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30),
        })
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Mock command server configuration.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Address the mock feed listens on.
    pub listen_addr: SocketAddr,

    /// Seconds between two pushed commands.
    pub interval_secs: u64,
}

impl MockConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`FlashlightError::InvalidConfig`] if `MOCK_LISTEN_ADDR` is
    /// set but unparseable.
    pub fn from_env() -> Result<Self, FlashlightError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            listen_addr: parse_addr("MOCK_LISTEN_ADDR", "127.0.0.1:9999")?,
            interval_secs: parse_env("MOCK_INTERVAL_SECS", 5),
        })
    }

    /// Interval between commands as a [`Duration`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Display client configuration.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Base URL of the gateway (e.g. `http://127.0.0.1:3000`).
    pub base_url: String,
}

impl DisplayConfig {
    /// Loads configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: std::env::var("FLASHLIGHT_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses a socket address variable. Unlike [`parse_env`], a set but
/// invalid value is an error.
fn parse_addr(key: &str, default: &str) -> Result<SocketAddr, FlashlightError> {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|e| FlashlightError::InvalidConfig(format!("{key}={raw}: {e}")))
}
