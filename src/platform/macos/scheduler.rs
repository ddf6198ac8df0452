//! Polling schedule and event pump.
//!
//! The scheduler has two states: idle (no timer) and armed (one repeating
//! NSTimer at the stored interval). Re-arming invalidates the previous
//! timer and counts the new period from that moment. In-flight fetches are
//! never cancelled. A second, faster timer pumps the event bus so fetch
//! completions reach the status item on the main thread.

use block2::RcBlock;

use crate::model::constants::EVENT_PUMP_SECS;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, ObjectExt, Sel, YES,
};
use crate::platform::macos::storage::current_interval;

/// Create a repeating AppKit timer and store it in the given ivar,
/// invalidating any previous timer held there. Added to the run loop in
/// CommonModes so it keeps firing while the menu is open.
///
/// # Safety
/// Must be called from the main thread; `target` must respond to `selector`
/// and carry the named `id` ivar.
unsafe fn install_timer(target: id, ivar: &str, selector: Sel, interval: f64) {
    let prev: id = *(*target).load_ivar::<id>(ivar);
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*target).store_ivar::<id>(ivar, nil);
    }

    // Create timer without auto-scheduling
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];

    (*target).store_ivar::<id>(ivar, timer);
}

/// Arm (or re-arm) the repeating refresh timer at the stored interval.
/// The period counts from this moment, not from the previous timer's last
/// fire.
///
/// # Safety
/// Must be called from the main thread; `controller` must be a valid
/// StatusController.
pub unsafe fn schedule_refresh(controller: id) {
    let interval = current_interval() as f64;
    install_timer(controller, "_refreshTimer", sel!(refreshTimerFired), interval);
}

/// Start the event pump: a fast repeating timer that drains the event bus
/// onto the main thread.
///
/// # Safety
/// Must be called from the main thread; `controller` must be a valid
/// StatusController.
pub unsafe fn start_event_pump(controller: id) {
    install_timer(controller, "_pumpTimer", sel!(pumpEvents), EVENT_PUMP_SECS);
}

/// Install an observer that cancels the timers when the app terminates.
/// In-flight fetches are not awaited.
///
/// # Safety
/// Must be called from the main thread; `controller` must be a valid
/// StatusController that outlives the process.
pub unsafe fn install_termination_observer(controller: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let queue: id = nil; // main thread

    let block = RcBlock::new(move |_note: id| unsafe {
        for ivar in ["_refreshTimer", "_pumpTimer"] {
            let timer: id = *(*controller).load_ivar::<id>(ivar);
            if timer != nil {
                let _: () = msg_send![timer, invalidate];
                (*controller).store_ivar::<id>(ivar, nil);
            }
        }
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: queue, usingBlock: &*block];
}
