//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It's called from the event pump timer
//! and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → status item / fetch worker
//! ```
//!
//! Events arrive in publish order, so when two fetches overlap the price
//! published last is the one left on the status item.

use crate::api::request_refresh;
use crate::events::{drain_events, AppEvent};
use crate::format_usd;
use crate::platform::macos::ffi::bridge::id;
use crate::platform::macos::ui::set_title;

/// Dispatch all pending events from the global event bus.
///
/// This should be called from the event pump timer. It drains all pending
/// events and executes the appropriate actions.
///
/// # Safety
///
/// Must be called from the main thread. The controller pointer must be valid.
pub unsafe fn dispatch_events(controller: id) {
    let events = drain_events();

    for event in events {
        dispatch_single_event(controller, &event);
    }
}

/// Dispatch a single event.
///
/// # Safety
///
/// Must be called from the main thread. The controller pointer must be valid.
unsafe fn dispatch_single_event(controller: id, event: &AppEvent) {
    match event {
        AppEvent::PriceUpdated(usd) => {
            set_title(controller, &format_usd(*usd));
        }

        AppEvent::RefreshRequested => {
            request_refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    // Note: Full integration testing requires macOS runtime.
    // These tests verify the dispatch logic at a structural level.

    #[test]
    fn test_module_compiles() {
        // Smoke test that the module compiles correctly
    }
}
