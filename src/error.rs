//! Error types for the gateway and the display client.
//!
//! [`FlashlightError`] is the server-side error type; every gateway failure
//! comes from the command feed or the configuration, never from a request.
//! [`DisplayError`] covers everything the display client can fail on.

/// Server-side errors: command decoding, configuration and the command feed.
#[derive(Debug, thiserror::Error)]
pub enum FlashlightError {
    /// A command from the feed could not be decoded or failed validation.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Connecting to the remote command feed failed.
    #[error("failed to connect to command feed at {addr}: {source}")]
    FeedConnect {
        /// `host:port` of the command feed.
        addr: String,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// The command feed kept closing until the connection budget ran out.
    #[error("command feed closed after {attempts} connection attempts")]
    ReconnectsExhausted {
        /// Number of connections made before giving up.
        attempts: u32,
    },

    /// I/O failure on an established feed connection.
    #[error("command feed i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The command feed task did not run to completion.
    #[error("command feed task failed: {0}")]
    FeedTask(#[from] tokio::task::JoinError),
}

/// Errors surfaced by the display client.
///
/// The client does not recover from any of these: the first one ends
/// [`crate::display::StateDisplay::start`].
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The gateway base URL is unusable.
    #[error("invalid gateway url: {0}")]
    InvalidUrl(String),

    /// The initial state request failed or returned a non-success status.
    #[error("current state request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The push subscription failed to open or broke.
    #[error("push subscription failed: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    /// A state payload was not valid JSON of the expected shape.
    #[error("malformed state: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the display failed.
    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for DisplayError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn feed_errors_name_the_failure() {
        let err = FlashlightError::ReconnectsExhausted { attempts: 5 };
        assert_eq!(err.to_string(), "command feed closed after 5 connection attempts");

        let refused = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        let err = FlashlightError::FeedConnect {
            addr: "127.0.0.1:9999".to_string(),
            source: refused,
        };
        assert!(err.to_string().contains("127.0.0.1:9999"));
    }

    #[test]
    fn io_errors_convert_into_feed_errors() {
        let err = FlashlightError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, FlashlightError::Io(_)));
    }

    #[test]
    fn display_error_wraps_malformed_json() {
        let Err(source) = serde_json::from_str::<serde_json::Value>("{not json") else {
            panic!("expected parse failure");
        };
        let err = DisplayError::from(source);
        assert!(err.to_string().starts_with("malformed state"));
    }
}
