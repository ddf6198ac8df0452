//! Thread-safe event bus using mpsc channels.
//!
//! Any thread publishes via `EventPublisher::publish()`; the main thread
//! drains via `EventBus::drain()`. This is how fetch completions cross from
//! worker tasks to the UI-owning thread.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer event bus.
///
/// Publishers are cheap to clone and thread-safe; the single consumer is
/// the main thread's pump timer.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Receive the next event without blocking, if one is pending.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // All senders dropped: the app is shutting down.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender (used by the global
    /// access module).
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event. Non-blocking; send errors are ignored because a
    /// dropped receiver means the app is shutting down.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
