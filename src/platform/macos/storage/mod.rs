//! Storage for macOS using NSUserDefaults.
//!
//! Persists the polling interval to the macOS preferences system.

pub mod preferences;

pub use preferences::*;
