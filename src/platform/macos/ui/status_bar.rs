//! Status bar (menu bar) item with dropdown menu.
//!
//! Creates a text item in the macOS menu bar showing the current price,
//! with a menu offering:
//! - Refresh Now (key equivalent "r")
//! - Refresh Interval (submenu with one checkmarked choice)
//! - Quit

use crate::model::constants::{APP_NAME, FONT_WEIGHT_SEMIBOLD, LOADING_TITLE, STATUS_FONT_SIZE};
use crate::model::{MenuEntry, INTERVAL_CHOICES, MENU_LAYOUT};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, ObjectExt};
use crate::platform::macos::storage::current_interval;

/// Install the status bar item and store it in the controller's ivar.
/// The item starts with a placeholder title until the first price lands.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_item(controller: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];
    (*controller).store_ivar::<id>("_statusItem", status_item);

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id(LOADING_TITLE)];

        let font: id = msg_send![
            get_class("NSFont"),
            systemFontOfSize: STATUS_FONT_SIZE,
            weight: FONT_WEIGHT_SEMIBOLD
        ];
        if font != nil {
            let _: () = msg_send![button, setFont: font];
        }
    }
}

/// Replace the status item's title.
///
/// # Safety
/// Must be called from the main thread; `controller` must be a valid
/// StatusController with an installed status item.
pub unsafe fn set_title(controller: id, title: &str) {
    let status_item: id = *(*controller).load_ivar::<id>("_statusItem");
    if status_item == nil {
        return;
    }
    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id(title)];
    }
}

/// Build the dropdown menu from scratch and attach it to the status item.
/// Called at startup and again whenever the interval choice changes, so the
/// checkmark always reflects the stored preference. Entry order comes from
/// `MENU_LAYOUT`.
///
/// # Safety
/// Must be called from the main thread; `controller` must be a valid
/// StatusController with an installed status item.
pub unsafe fn rebuild_menu(controller: id) {
    let status_item: id = *(*controller).load_ivar::<id>("_statusItem");
    if status_item == nil {
        return;
    }

    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    for entry in &MENU_LAYOUT {
        match entry {
            MenuEntry::Title => {
                // App name header (no action, stays disabled)
                let header: id = msg_send![get_class("NSMenuItem"), new];
                let _: () = msg_send![header, setTitle: nsstring_id(APP_NAME)];
                let _: () = msg_send![menu, addItem: header];
            }

            MenuEntry::RefreshNow => {
                let item: id = msg_send![get_class("NSMenuItem"), alloc];
                let item: id = msg_send![
                    item,
                    initWithTitle: nsstring_id("Refresh Now"),
                    action: sel!(refreshNow:),
                    keyEquivalent: nsstring_id("r")
                ];
                let _: () = msg_send![item, setTarget: controller];
                let _: () = msg_send![menu, addItem: item];
            }

            MenuEntry::IntervalPicker => {
                // One checkmark, on the stored choice
                let interval = current_interval();

                let picker: id = msg_send![get_class("NSMenuItem"), new];
                let _: () = msg_send![picker, setTitle: nsstring_id("Refresh Interval")];

                let submenu: id = msg_send![get_class("NSMenu"), alloc];
                let submenu: id = msg_send![submenu, init];

                for choice in &INTERVAL_CHOICES {
                    let item: id = msg_send![get_class("NSMenuItem"), alloc];
                    let item: id = msg_send![
                        item,
                        initWithTitle: nsstring_id(choice.label),
                        action: sel!(intervalPressed:),
                        keyEquivalent: nsstring_id(choice.key)
                    ];
                    let _: () = msg_send![item, setTarget: controller];
                    let _: () = msg_send![item, setTag: choice.seconds as isize];
                    // NSControlStateValueOn = 1, Off = 0
                    let state: isize = if choice.seconds == interval { 1 } else { 0 };
                    let _: () = msg_send![item, setState: state];
                    let _: () = msg_send![submenu, addItem: item];
                }

                let _: () = msg_send![picker, setSubmenu: submenu];
                let _: () = msg_send![menu, addItem: picker];
            }

            MenuEntry::Separator => {
                let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
                let _: () = msg_send![menu, addItem: separator];
            }

            MenuEntry::Quit => {
                let item: id = msg_send![get_class("NSMenuItem"), alloc];
                let item: id = msg_send![
                    item,
                    initWithTitle: nsstring_id("Quit"),
                    action: sel!(quitPressed:),
                    keyEquivalent: nsstring_id("q")
                ];
                let _: () = msg_send![item, setTarget: controller];
                let _: () = msg_send![menu, addItem: item];
            }
        }
    }

    let _: () = msg_send![status_item, setMenu: menu];
}
