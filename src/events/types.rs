//! Application events for inter-module communication.
//!
//! Pure Rust with no FFI dependencies. Producers (fetch tasks, menu
//! actions) publish these; the main-thread dispatcher applies them to
//! the status item.

/// Application-level events flowing through the event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A fetch completed with a whole-dollar BTC price. Published from a
    /// worker task; the dispatcher formats it and updates the title.
    PriceUpdated(u64),

    /// The user asked for an immediate refresh ("Refresh Now").
    RefreshRequested,
}

impl AppEvent {
    /// Human-readable description for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::PriceUpdated(_) => "Price fetch completed",
            AppEvent::RefreshRequested => "Manual refresh requested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_equality() {
        assert_eq!(AppEvent::PriceUpdated(100), AppEvent::PriceUpdated(100));
        assert_ne!(AppEvent::PriceUpdated(100), AppEvent::PriceUpdated(101));
        assert_ne!(AppEvent::PriceUpdated(100), AppEvent::RefreshRequested);
    }

    #[test]
    fn event_carries_price() {
        let event = AppEvent::PriceUpdated(65432);
        match event {
            AppEvent::PriceUpdated(usd) => assert_eq!(usd, 65432),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [AppEvent::PriceUpdated(0), AppEvent::RefreshRequested];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
