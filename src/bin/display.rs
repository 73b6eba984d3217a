//! Console display client.
//!
//! Prints one line per state change of the gateway at `FLASHLIGHT_URL`.
//! Logs go to stderr so stdout carries only the display.

use tracing_subscriber::EnvFilter;

use flashlight_gateway::config::DisplayConfig;
use flashlight_gateway::display::{ConsoleElement, Endpoints, StateDisplay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DisplayConfig::from_env();
    let endpoints = Endpoints::from_base(&config.base_url)?;
    tracing::info!(url = %config.base_url, "starting flashlight display");

    let mut display = StateDisplay::new(ConsoleElement::new(std::io::stdout()));
    display.start(&endpoints).await?;

    Ok(())
}
