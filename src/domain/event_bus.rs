//! Broadcast channel for state snapshots.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel. Every applied
//! command publishes the resulting [`State`] through the bus, and every
//! WebSocket connection subscribes to receive it.

use tokio::sync::broadcast;

use super::State;

/// Broadcast bus for [`State`] snapshots.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity of at
/// least one. When the ring buffer is full, the oldest snapshots are dropped
/// for lagging receivers, which then continue from the oldest retained one.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<State>,
}

impl EventBus {
    /// Creates a new `EventBus` holding up to `capacity` unread snapshots.
    ///
    /// A capacity of zero (e.g. `EVENT_BUS_CAPACITY=0`) is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes a snapshot to all subscribers.
    ///
    /// Returns the number of receivers that got it. With no receivers the
    /// snapshot is silently dropped.
    pub fn publish(&self, state: State) -> usize {
        self.sender.send(state).unwrap_or(0)
    }

    /// Creates a receiver for all future snapshots.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<State> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
