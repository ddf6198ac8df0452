//! Ticker state (pure Rust, no FFI).
//!
//! The authoritative state lives in AppKit objects (the status item title)
//! and NSUserDefaults (the interval), and the live UI path reads and writes
//! those directly. This struct restates the same transitions so they can
//! run as ordinary host tests; it is not consulted at runtime.

use crate::format_usd;

use super::constants::{DEFAULT_INTERVAL_SECS, LOADING_TITLE};
use super::interval::IntervalChoice;

/// Mirror of the status item state: active polling interval plus the
/// current display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerState {
    /// Polling interval in seconds; the only persisted value.
    pub interval_secs: i64,
    /// Current status bar title.
    pub title: String,
}

impl Default for TickerState {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            title: LOADING_TITLE.to_string(),
        }
    }
}

impl TickerState {
    /// Select a new polling interval.
    pub fn set_interval(&mut self, seconds: i64) {
        self.interval_secs = seconds;
    }

    /// Whether a menu choice should carry the checkmark.
    pub fn is_active(&self, choice: &IntervalChoice) -> bool {
        self.interval_secs == choice.seconds
    }

    /// Apply a fetched whole-dollar price to the display label.
    ///
    /// Failed fetches never reach this point, so the previous label stands
    /// on error.
    pub fn apply_price(&mut self, usd: u64) {
        self.title = format_usd(usd);
    }
}
