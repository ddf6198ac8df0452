//! Persistence of the polling interval to NSUserDefaults.
//!
//! One key survives restarts. Writes are fire-and-forget: NSUserDefaults
//! failures are not surfaced, by design.

use crate::model::constants::{DEFAULT_INTERVAL_SECS, PREF_INTERVAL};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};

/// Reads an integer from NSUserDefaults, returns `default` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_int(key: &str, default: i64) -> i64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        // NSInteger is i64 on 64-bit macOS
        msg_send![ud, integerForKey: k]
    }
}

/// Saves an integer to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_int(key: &str, val: i64) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setInteger: val, forKey: k];
}

/// The polling interval currently in effect: the stored preference, or the
/// default when none was ever stored. No validation; a stored value that
/// matches no interval choice is returned as-is.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn current_interval() -> i64 {
    prefs_get_int(PREF_INTERVAL, DEFAULT_INTERVAL_SECS)
}
