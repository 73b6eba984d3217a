//! Mock command feed for local development.
//!
//! Pushes a fixed `COLOR` / `ON` / `COLOR` / `OFF` script to every peer and
//! exits once a peer disconnects.

use tracing_subscriber::EnvFilter;

use flashlight_gateway::config::MockConfig;
use flashlight_gateway::feed::MockCommandServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = MockConfig::from_env()?;
    let server = MockCommandServer::bind(config.listen_addr, config.interval()).await?;
    tracing::info!(addr = %server.local_addr()?, "mock command feed listening");

    server.serve().await?;
    Ok(())
}
