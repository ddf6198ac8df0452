#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc2 macros

//! Library root. Pure helpers and FFI-free modules live here so the data
//! model, formatting and event plumbing run as normal tests on any host;
//! everything that talks to AppKit is gated under `platform`.

pub mod api;
pub mod events;
pub mod model;
pub mod platform;

// Re-export the types most call sites want
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::TickerState;

/// Format a whole-dollar amount the way the status bar shows it: the "$ "
/// symbol (space included), comma grouping, no fraction digits.
///
/// `65000` becomes `"$ 65,000"`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("$ {grouped}")
}
