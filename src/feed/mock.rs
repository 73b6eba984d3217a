//! Scripted command source for local runs.
//!
//! Every connection receives [`script`] in a loop, one command per
//! interval. The server stops as soon as any peer disconnects.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

use crate::domain::Command;
use crate::error::FlashlightError;

/// Commands pushed to every peer, in order, repeated forever.
#[must_use]
pub fn script() -> [Command; 4] {
    [
        Command::color(0xff69_b4),
        Command::on(),
        Command::color(0x00bf_ff),
        Command::off(),
    ]
}

/// Mock command feed bound to a local socket.
#[derive(Debug)]
pub struct MockCommandServer {
    listener: TcpListener,
    interval: Duration,
}

impl MockCommandServer {
    /// Binds the server to `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`FlashlightError::Io`] if the socket cannot be bound.
    pub async fn bind(addr: SocketAddr, interval: Duration) -> Result<Self, FlashlightError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, interval })
    }

    /// Address the server actually listens on.
    ///
    /// # Errors
    ///
    /// Returns [`FlashlightError::Io`] if the socket has no local address.
    pub fn local_addr(&self) -> Result<SocketAddr, FlashlightError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts peers and pushes the script to each until one disconnects.
    ///
    /// # Errors
    ///
    /// Returns [`FlashlightError::Io`] if accepting a connection fails.
    pub async fn serve(self) -> Result<(), FlashlightError> {
        let (gone_tx, mut gone_rx) = mpsc::channel::<SocketAddr>(1);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (stream, peer) = accepted?;
                    tracing::info!(%peer, "command feed peer connected");
                    let gone_tx = gone_tx.clone();
                    let interval = self.interval;
                    tokio::spawn(async move {
                        if let Err(e) = serve_peer(stream, interval).await {
                            tracing::warn!(%peer, error = %e, "command push failed");
                        }
                        let _ = gone_tx.send(peer).await;
                    });
                }
                Some(peer) = gone_rx.recv() => {
                    tracing::info!(%peer, "peer disconnected, shutting down");
                    return Ok(());
                }
            }
        }
    }
}

async fn serve_peer(stream: TcpStream, interval: Duration) -> Result<(), FlashlightError> {
    let (mut reader, mut writer) = stream.into_split();
    tokio::select! {
        result = push_commands(&mut writer, interval) => result,
        result = wait_for_eof(&mut reader) => result,
    }
}

async fn push_commands(
    writer: &mut OwnedWriteHalf,
    interval: Duration,
) -> Result<(), FlashlightError> {
    for command in script().iter().cycle() {
        tracing::debug!(?command, "publishing command");
        let payload = serde_json::to_vec(command)?;
        writer.write_all(&payload).await?;
        tokio::time::sleep(interval).await;
    }
    Ok(())
}

async fn wait_for_eof(reader: &mut OwnedReadHalf) -> Result<(), FlashlightError> {
    let mut buf = [0u8; 256];
    while reader.read(&mut buf).await? > 0 {}
    Ok(())
}
