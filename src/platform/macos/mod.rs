//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! - FFI bridge helpers over the objc2 runtime
//! - UI: the status item, its menu and the controller object
//! - Storage: NSUserDefaults persistence of the polling interval
//! - Scheduler: NSTimer polling schedule plus the event pump
//! - Handlers: applying bus events on the main thread

pub mod ffi;
pub mod handlers;
pub mod scheduler;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use ffi::bridge;
pub use handlers::*;
pub use scheduler::*;
pub use storage::*;
pub use ui::*;
