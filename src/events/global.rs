//! Global access to the application event bus.
//!
//! The bus is initialized once at startup via `init_event_bus()`; after
//! that any module (including worker tasks) can `publish()`, and the main
//! thread drains with `drain_events()`.
//!
//! The `Sender` lives in a `OnceLock` (it is `Send + Sync`); the
//! `Receiver` sits behind a `Mutex` but is only ever touched from the main
//! thread, so contention is effectively zero.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus. Must be called exactly once at
/// application startup, before any events are published.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("Event bus already initialized (sender)");

    RECEIVER
        .set(Mutex::new(receiver))
        .expect("Event bus already initialized (receiver)");
}

/// Get a publisher handle for the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn publisher() -> EventPublisher {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    EventPublisher::from_sender(sender.clone())
}

/// Publish an event to the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn publish(event: AppEvent) {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    // Ignore send errors - receiver dropped means the app is shutting down
    let _ = sender.send(event);
}

/// Drain all pending events from the global event bus. Called from the
/// main-thread pump timer.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn drain_events() -> Vec<AppEvent> {
    let receiver = RECEIVER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    let receiver = receiver.lock().expect("Event bus receiver mutex poisoned");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    // The global SENDER/RECEIVER cannot be exercised here: OnceLock can only
    // be set once per test process. The underlying behavior is covered by
    // the EventBus tests in bus.rs; these wrappers are thin delegation.

    #[test]
    fn module_compiles() {}
}
