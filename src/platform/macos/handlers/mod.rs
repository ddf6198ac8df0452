//! Event handlers for macOS.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
