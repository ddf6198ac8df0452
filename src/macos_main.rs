//! macOS-specific entry point and application logic.
//!
//! This module wires the status item together and starts the run loop.
//! The StatusController implementation is in platform/macos/ui/controller.rs.

use coinbar::api::request_refresh;
use coinbar::platform::macos::ffi::bridge::{autoreleasepool, msg_send, NSApp};
use coinbar::platform::macos::scheduler::{
    install_termination_observer, schedule_refresh, start_event_pump,
};
use coinbar::platform::macos::ui::{create_controller, install_status_item, rebuild_menu};

/// Main entry point for macOS.
pub fn run() {
    // Event bus and fetch worker are already initialized by main()

    autoreleasepool(|| {
        unsafe {
            let app = NSApp();
            // NSApplicationActivationPolicyAccessory = 1 (no Dock icon)
            let _: bool = msg_send![app, setActivationPolicy: 1i64];

            let controller = create_controller();
            install_status_item(controller);
            rebuild_menu(controller);

            // Pump fetch completions onto the main thread, clean up on quit
            start_event_pump(controller);
            install_termination_observer(controller);

            // Fetch immediately, then at the stored interval
            request_refresh();
            schedule_refresh(controller);

            let _: () = msg_send![app, run];
        }
    });
}
