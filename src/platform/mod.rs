//! Platform-specific implementations.
//!
//! Only macOS is supported; everything that touches Cocoa/AppKit lives
//! behind the target gate so the pure modules build and test anywhere.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
