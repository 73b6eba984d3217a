//! flashlight-gateway server entry point.
//!
//! Starts the command feed reader and the Axum HTTP server with the
//! current-state and WebSocket push endpoints. The server shuts down
//! gracefully on Ctrl-C or when the command feed gives up.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use flashlight_gateway::api;
use flashlight_gateway::app_state::AppState;
use flashlight_gateway::config::GatewayConfig;
use flashlight_gateway::domain::{EventBus, Flashlight};
use flashlight_gateway::feed::CommandFeed;
use flashlight_gateway::gateway;
use flashlight_gateway::service::FlashlightService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting flashlight-gateway");

    // Build domain + service layer
    let event_bus = EventBus::new(config.event_bus_capacity);
    let flashlight_service = Arc::new(FlashlightService::new(Flashlight::default(), event_bus));

    // Build router
    let app = api::build_app(
        AppState::new(Arc::clone(&flashlight_service)),
        config.request_timeout(),
    );

    // Start server and command feed; either Ctrl-C or a failed feed stops both
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for ctrl-c");
        }
    };
    gateway::run(
        listener,
        app,
        CommandFeed::from_config(&config),
        flashlight_service,
        ctrl_c,
    )
    .await?;

    Ok(())
}
