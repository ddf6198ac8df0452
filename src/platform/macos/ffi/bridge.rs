//! Thin helpers over the objc2 runtime.
//!
//! All AppKit calls in this crate go through dynamic `msg_send!` with `id`
//! pointers; this module carries the aliases and helpers that keep those
//! call sites short.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

// Core objc2 re-exports
pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel, ClassType};

// Foundation types and classes
pub use objc2_foundation::NSString;

// AppKit classes (importing them also links the framework)
pub use objc2_app_kit::NSApplication;

use objc2::encode::Encode;

/// Objective-C object pointer.
///
/// Prefer typed pointers where the type is statically known; `id` is for
/// the dynamic `msg_send!` plumbing.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL constants (u8-backed, not Rust bool).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw retained `id` pointer, for
/// passing straight into `msg_send!`.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Get a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Extension trait for accessing instance variables on `AnyObject`, built
/// on `Ivar::load`/`Ivar::load_mut`.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T; UI objects are main-thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T; UI objects are main-thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within a fresh autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
