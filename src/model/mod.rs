//! Pure data model: constants, the interval table and the ticker state.

pub mod app_state;
pub mod constants;
pub mod interval;
pub mod menu;

// Re-export model types for convenience
pub use app_state::TickerState;
pub use constants::*;
pub use interval::{choice_for_seconds, IntervalChoice, INTERVAL_CHOICES};
pub use menu::{MenuEntry, MENU_LAYOUT};
