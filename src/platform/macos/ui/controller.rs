//! StatusController class for the menu bar item.
//!
//! This module contains the NSObject subclass that handles:
//! - Menu actions (refresh now, interval selection, quit)
//! - Draining the event bus on the main thread
//! - Refresh timer fires

use crate::events::{publish, AppEvent};
use crate::model::constants::PREF_INTERVAL;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, ObjectExt};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::scheduler::schedule_refresh;
use crate::platform::macos::storage::prefs_set_int;
use crate::platform::macos::ui::rebuild_menu;
use crate::api::request_refresh;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

// ============================================================================
// StatusController registration and creation
// ============================================================================

/// Register the StatusController class and create an instance.
///
/// This creates an NSObject subclass with the instance variables and
/// action methods the status item needs.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_controller() -> id {
    let class_name = c"StatusController";
    let controller_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();

        // ====== Instance Variables ======
        builder.add_ivar::<id>(c"_statusItem");
        builder.add_ivar::<id>(c"_refreshTimer");
        builder.add_ivar::<id>(c"_pumpTimer");

        // ====== Methods ======
        register_methods(&mut builder);

        builder.register()
    };

    let controller: id = msg_send![controller_class, new];

    (*controller).store_ivar::<id>("_statusItem", nil);
    (*controller).store_ivar::<id>("_refreshTimer", nil);
    (*controller).store_ivar::<id>("_pumpTimer", nil);

    controller
}

/// Register all methods for the StatusController.
///
/// # Safety
/// Must be called during class registration.
unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Menu actions
    builder.add_method(
        sel!(refreshNow:),
        refresh_now as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(intervalPressed:),
        interval_pressed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(quitPressed:),
        quit_pressed as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Timer fires
    builder.add_method(
        sel!(pumpEvents),
        pump_events as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(
        sel!(refreshTimerFired),
        refresh_timer_fired as unsafe extern "C-unwind" fn(_, _),
    );
}

// ============================================================================
// StatusController methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn refresh_now(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    // Publish RefreshRequested - dispatcher will hand it to the fetch worker
    publish(AppEvent::RefreshRequested);
}

// Interval menu item pressed. The item's tag carries the interval in
// seconds. Persist, rebuild the menu so the checkmark moves, then re-arm
// the timer so the new period counts from now.
unsafe extern "C-unwind" fn interval_pressed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let seconds: isize = msg_send![sender, tag];
    prefs_set_int(PREF_INTERVAL, seconds as i64);

    let controller = this as *mut _ as id;
    rebuild_menu(controller);
    schedule_refresh(controller);
}

unsafe extern "C-unwind" fn quit_pressed(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let app: id = msg_send![get_class("NSApplication"), sharedApplication];
    let _: () = msg_send![app, terminate: nil];
}

// Event pump fire: drain the bus onto the main thread.
unsafe extern "C-unwind" fn pump_events(this: &mut AnyObject, _cmd: Sel) {
    dispatch_events(this as *mut _ as id);
}

unsafe extern "C-unwind" fn refresh_timer_fired(_this: &mut AnyObject, _cmd: Sel) {
    request_refresh();
}
