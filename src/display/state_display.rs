//! Renders the flashlight state and follows the live push channel.
//!
//! [`StateDisplay::start`] runs two futures side by side: a producer that
//! fetches the initial state once and then forwards every pushed message,
//! and a single consumer that renders whatever the producer queued, in
//! order. The initial state is queued before the push subscription is
//! opened, so it is always rendered first.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use super::DisplayElement;
use crate::api::{CURRENT_STATE_PATH, PUSH_PATH};
use crate::domain::State;
use crate::error::DisplayError;

/// States queued between the producer and the render loop.
const STATE_QUEUE_CAPACITY: usize = 64;

/// Text shown for a state.
#[must_use]
pub const fn display_text(state: &State) -> &'static str {
    if state.is_turned_on { "ON" } else { "OFF" }
}

/// Resolved gateway URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Absolute URL of the current-state endpoint.
    pub current_state: String,
    /// Absolute `ws://` or `wss://` URL of the push endpoint.
    pub push: String,
}

impl Endpoints {
    /// Derives both endpoints from the gateway base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidUrl`] if `base` does not parse or is
    /// not `http`/`https`.
    pub fn from_base(base: &str) -> Result<Self, DisplayError> {
        let invalid = |detail: String| DisplayError::InvalidUrl(format!("{base}: {detail}"));

        let url = reqwest::Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        let push_scheme = match url.scheme() {
            "http" => "ws",
            "https" => "wss",
            other => return Err(invalid(format!("unsupported scheme `{other}`"))),
        };

        let current_state = url
            .join(CURRENT_STATE_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        let mut push = url.join(PUSH_PATH).map_err(|e| invalid(e.to_string()))?;
        push.set_scheme(push_scheme)
            .map_err(|()| invalid(format!("cannot switch to `{push_scheme}`")))?;

        Ok(Self {
            current_state: current_state.to_string(),
            push: push.to_string(),
        })
    }
}

/// Keeps a [`DisplayElement`] in sync with the gateway.
#[derive(Debug)]
pub struct StateDisplay<E> {
    element: E,
    renders: u64,
}

impl<E: DisplayElement> StateDisplay<E> {
    /// Creates a display drawing on `element`.
    pub const fn new(element: E) -> Self {
        Self {
            element,
            renders: 0,
        }
    }

    /// The element being drawn on.
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Number of completed renders.
    pub const fn renders(&self) -> u64 {
        self.renders
    }

    /// Shows `"ON"`/`"OFF"` and the state's color on the element.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Render`] if the element cannot be written.
    pub fn render(&mut self, state: &State) -> Result<(), DisplayError> {
        let text = display_text(state);
        self.element.set_text(text);
        self.element.set_background(&state.color);
        self.element.flush()?;
        self.renders += 1;
        tracing::debug!(text, color = %state.color, renders = self.renders, "state rendered");
        Ok(())
    }

    /// Fetches and renders the current state, then renders every pushed
    /// state until the server closes the subscription.
    ///
    /// # Errors
    ///
    /// Fails on the first transport, decoding or render error. Nothing is
    /// retried and the subscription is not reopened.
    pub async fn start(&mut self, endpoints: &Endpoints) -> Result<(), DisplayError> {
        self.start_with(&reqwest::Client::new(), endpoints).await
    }

    /// Same as [`StateDisplay::start`] with a caller-provided HTTP client.
    ///
    /// # Errors
    ///
    /// See [`StateDisplay::start`].
    pub async fn start_with(
        &mut self,
        client: &reqwest::Client,
        endpoints: &Endpoints,
    ) -> Result<(), DisplayError> {
        let (state_tx, state_rx) = mpsc::channel(STATE_QUEUE_CAPACITY);
        // Whichever side fails first ends both.
        tokio::try_join!(
            feed_states(client, endpoints, state_tx),
            self.consume(state_rx)
        )?;
        Ok(())
    }

    async fn consume(&mut self, mut state_rx: mpsc::Receiver<State>) -> Result<(), DisplayError> {
        while let Some(state) = state_rx.recv().await {
            self.render(&state)?;
        }
        Ok(())
    }
}

/// Queues the initial state, then every pushed state. Stops quietly if the
/// consumer has gone away.
async fn feed_states(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    state_tx: mpsc::Sender<State>,
) -> Result<(), DisplayError> {
    let initial: State = client
        .get(&endpoints.current_state)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    tracing::info!(url = %endpoints.current_state, "initial state fetched");
    if state_tx.send(initial).await.is_err() {
        return Ok(());
    }

    let (mut stream, _) = tokio_tungstenite::connect_async(endpoints.push.as_str()).await?;
    tracing::info!(url = %endpoints.push, "push subscription opened");

    while let Some(message) = stream.next().await {
        let state: State = match message? {
            Message::Text(text) => serde_json::from_str(text.as_str())?,
            Message::Binary(bytes) => serde_json::from_slice(&bytes)?,
            Message::Close(_) => break,
            _ => continue,
        };
        if state_tx.send(state).await.is_err() {
            return Ok(());
        }
    }

    tracing::info!(url = %endpoints.push, "push subscription closed");
    Ok(())
}
