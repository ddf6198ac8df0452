//! FFI bindings to Cocoa via the objc2 ecosystem.

pub mod bridge;
