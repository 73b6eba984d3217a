//! Command feed reader against scripted TCP peers and the mock server.

#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use flashlight_gateway::domain::{EventBus, Flashlight, State};
use flashlight_gateway::error::FlashlightError;
use flashlight_gateway::feed::{CommandFeed, MockCommandServer};
use flashlight_gateway::service::FlashlightService;

const TIMEOUT: Duration = Duration::from_secs(2);

fn make_service() -> Arc<FlashlightService> {
    Arc::new(FlashlightService::new(Flashlight::default(), EventBus::new(64)))
}

/// Accepts one connection per payload, writes it, then closes.
async fn scripted_peer(payloads: Vec<&'static [u8]>) -> u16 {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };
    tokio::spawn(async move {
        for payload in payloads {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let _ = stream.write_all(payload).await;
            let _ = stream.shutdown().await;
        }
    });
    addr.port()
}

#[tokio::test]
async fn applies_valid_commands_and_skips_invalid_ones() {
    let port = scripted_peer(vec![
        br#"{"command": "COLOR", "metadata": 255}{"command": "ON"}
{"command": "COLOR"}{"command": "OFF", "metadata": null}{"command": "O"#.as_slice(),
    ])
    .await;
    let service = make_service();
    let mut rx = service.event_bus().subscribe();

    let feed = CommandFeed::new("127.0.0.1", port, 1);
    let result = tokio::time::timeout(TIMEOUT, feed.run(&service)).await;

    let Ok(Err(FlashlightError::ReconnectsExhausted { attempts: 1 })) = result else {
        panic!("feed should stop after its only connection closed");
    };
    assert_eq!(service.current_state().await, State::new(false, "#0000ff"));

    let mut published = 0;
    while rx.try_recv().is_ok() {
        published += 1;
    }
    assert_eq!(published, 3);
}

#[tokio::test]
async fn reconnects_until_budget_is_spent() {
    let port = scripted_peer(vec![
        br#"{"command": "OFF"}"#.as_slice(),
        br#"{"command": "COLOR", "metadata": 49151}"#.as_slice(),
    ])
    .await;
    let service = make_service();

    let feed = CommandFeed::new("127.0.0.1", port, 2);
    let result = tokio::time::timeout(TIMEOUT, feed.run(&service)).await;

    let Ok(Err(FlashlightError::ReconnectsExhausted { attempts: 2 })) = result else {
        panic!("feed should use both connections");
    };
    assert_eq!(service.current_state().await, State::new(false, "#00bfff"));
}

#[tokio::test]
async fn refused_connection_ends_the_feed() {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };
    drop(listener);

    let service = make_service();
    let feed = CommandFeed::new("127.0.0.1", addr.port(), 5);
    let result = tokio::time::timeout(TIMEOUT, feed.run(&service)).await;

    let Ok(Err(FlashlightError::FeedConnect { addr: failed, .. })) = result else {
        panic!("expected connect failure");
    };
    assert_eq!(failed, format!("127.0.0.1:{}", addr.port()));
    assert_eq!(service.current_state().await, State::new(true, "#deadbeef"));
}

#[tokio::test]
async fn mock_server_drives_the_feed_and_stops_on_disconnect() {
    let Ok(server) =
        MockCommandServer::bind(([127, 0, 0, 1], 0).into(), Duration::from_millis(10)).await
    else {
        panic!("bind mock");
    };
    let Ok(addr) = server.local_addr() else {
        panic!("mock addr");
    };
    let serving = tokio::spawn(server.serve());

    let service = make_service();
    let mut rx = service.event_bus().subscribe();
    let feed = CommandFeed::new("127.0.0.1", addr.port(), 1);
    let feed_service = Arc::clone(&service);
    let feeding = tokio::spawn(async move { feed.run(&feed_service).await });

    let mut states = Vec::new();
    for _ in 0..4 {
        let Ok(Ok(state)) = tokio::time::timeout(TIMEOUT, rx.recv()).await else {
            panic!("expected a state from the mock script");
        };
        states.push(state);
    }
    assert_eq!(
        states,
        vec![
            State::new(true, "#ff69b4"),
            State::new(true, "#ff69b4"),
            State::new(true, "#00bfff"),
            State::new(false, "#00bfff"),
        ]
    );

    feeding.abort();
    let Ok(Ok(Ok(()))) = tokio::time::timeout(TIMEOUT, serving).await else {
        panic!("mock server should stop once its peer is gone");
    };
}
