//! Runs the HTTP server next to the command feed.
//!
//! The server stops gracefully on an interrupt or as soon as the feed task
//! ends. The feed's result becomes the gateway's result, unless the
//! interrupt came first, in which case the feed is aborted.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::error::FlashlightError;
use crate::feed::CommandFeed;
use crate::service::FlashlightService;

/// Serves `app` on `listener` while `feed` applies commands to `service`.
///
/// # Errors
///
/// Returns the feed's error once it gives up, [`FlashlightError::Io`] if
/// the server itself fails, or [`FlashlightError::FeedTask`] if the feed
/// task panicked.
pub async fn run<I>(
    listener: TcpListener,
    app: Router,
    feed: CommandFeed,
    service: Arc<FlashlightService>,
    interrupt: I,
) -> Result<(), FlashlightError>
where
    I: Future<Output = ()> + Send + 'static,
{
    let (halt_tx, halt_rx) = oneshot::channel();
    let feed_task = tokio::spawn(async move {
        let result = feed.run(&service).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "command feed stopped, shutting down");
        }
        let _ = halt_tx.send(());
        result
    });

    let interrupted = Arc::new(AtomicBool::new(false));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(interrupt, halt_rx, Arc::clone(&interrupted)))
        .await?;

    if interrupted.load(Ordering::SeqCst) {
        feed_task.abort();
        return Ok(());
    }
    feed_task.await?
}

/// Resolves on `interrupt` or once the feed task has ended, recording
/// which of the two it was.
async fn shutdown_signal<I>(
    interrupt: I,
    feed_halted: oneshot::Receiver<()>,
    interrupted: Arc<AtomicBool>,
) where
    I: Future<Output = ()>,
{
    tokio::select! {
        () = interrupt => {
            tracing::info!("interrupt received, shutting down");
            interrupted.store(true, Ordering::SeqCst);
        }
        _ = feed_halted => {}
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api;
    use crate::app_state::AppState;
    use crate::domain::{EventBus, Flashlight};

    const TIMEOUT: Duration = Duration::from_secs(2);

    async fn setup() -> (TcpListener, Router, Arc<FlashlightService>) {
        let service = Arc::new(FlashlightService::new(Flashlight::default(), EventBus::new(8)));
        let app = api::build_app(AppState::new(Arc::clone(&service)), TIMEOUT);
        let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind");
        };
        (listener, app, service)
    }

    #[tokio::test]
    async fn feed_failure_stops_the_server_with_its_error() {
        let Ok(closed) = TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind");
        };
        let Ok(closed_addr) = closed.local_addr() else {
            panic!("local addr");
        };
        drop(closed);

        let (listener, app, service) = setup().await;
        let feed = CommandFeed::new("127.0.0.1", closed_addr.port(), 3);
        let result = tokio::time::timeout(
            TIMEOUT,
            run(listener, app, feed, service, std::future::pending()),
        )
        .await;

        let Ok(Err(FlashlightError::FeedConnect { .. })) = result else {
            panic!("expected the feed's connect error, got {result:?}");
        };
    }

    #[tokio::test]
    async fn interrupt_stops_the_server_while_the_feed_is_running() {
        // Accepted by the backlog but never written to, so the feed blocks.
        let Ok(silent) = TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind");
        };
        let Ok(silent_addr) = silent.local_addr() else {
            panic!("local addr");
        };

        let (listener, app, service) = setup().await;
        let feed = CommandFeed::new("127.0.0.1", silent_addr.port(), 1);
        let interrupt = tokio::time::sleep(Duration::from_millis(50));
        let result =
            tokio::time::timeout(TIMEOUT, run(listener, app, feed, service, interrupt)).await;

        let Ok(Ok(())) = result else {
            panic!("expected a clean stop, got {result:?}");
        };
        drop(silent);
    }
}
