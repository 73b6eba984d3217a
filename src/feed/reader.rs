//! TCP reader for the remote command feed.
//!
//! The feed is a byte stream of JSON command objects written back to back.
//! Objects are flat, so a frame ends at the first `}`.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;

use crate::config::GatewayConfig;
use crate::domain::decode_command;
use crate::error::FlashlightError;
use crate::service::FlashlightService;

/// Byte that terminates every command frame.
pub const FRAME_TERMINATOR: u8 = b'}';

/// Connection settings and reconnect budget for the command feed.
#[derive(Debug, Clone)]
pub struct CommandFeed {
    host: String,
    port: u16,
    max_reconnect_tries: u32,
}

impl CommandFeed {
    /// Creates a feed reader for `host:port` allowing `max_reconnect_tries`
    /// connections in total.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, max_reconnect_tries: u32) -> Self {
        Self {
            host: host.into(),
            port,
            max_reconnect_tries,
        }
    }

    /// Builds the feed reader from gateway configuration.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(
            config.commands_host.clone(),
            config.commands_port,
            config.commands_max_reconnect_tries,
        )
    }

    /// `host:port` of the feed.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reads commands and applies each valid one through `service`.
    ///
    /// Invalid frames are logged and skipped. When the peer closes the
    /// stream the reader reconnects until the budget is spent.
    ///
    /// # Errors
    ///
    /// - [`FlashlightError::FeedConnect`] if a connection attempt fails.
    /// - [`FlashlightError::Io`] on a read error.
    /// - [`FlashlightError::ReconnectsExhausted`] once every allowed
    ///   connection has been closed by the peer.
    pub async fn run(&self, service: &FlashlightService) -> Result<(), FlashlightError> {
        let addr = self.addr();

        for attempt in 1..=self.max_reconnect_tries {
            tracing::info!(%addr, attempt, "opening command feed connection");
            let stream = TcpStream::connect((self.host.as_str(), self.port))
                .await
                .map_err(|source| FlashlightError::FeedConnect {
                    addr: addr.clone(),
                    source,
                })?;
            tracing::info!(%addr, attempt, "command feed connected");

            let applied = read_frames(stream, service).await?;
            tracing::error!(
                %addr,
                attempt,
                applied,
                "command feed closed unexpectedly, reconnecting"
            );
        }

        Err(FlashlightError::ReconnectsExhausted {
            attempts: self.max_reconnect_tries,
        })
    }
}

/// Reads frames until end-of-stream, returning how many commands were
/// applied. A trailing partial frame counts as end-of-stream.
async fn read_frames(
    stream: TcpStream,
    service: &FlashlightService,
) -> Result<usize, FlashlightError> {
    let mut reader = BufReader::new(stream);
    let mut frame = Vec::new();
    let mut applied = 0;

    loop {
        frame.clear();
        let read = reader.read_until(FRAME_TERMINATOR, &mut frame).await?;
        if read == 0 || frame.last() != Some(&FRAME_TERMINATOR) {
            return Ok(applied);
        }

        match decode_command(&frame) {
            Ok(command) => {
                service.apply(command).await;
                applied += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "command validation failed, skipping it");
            }
        }
    }
}
