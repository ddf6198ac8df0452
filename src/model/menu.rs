//! Fixed layout of the status item dropdown.

/// One logical entry of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Disabled app-name header.
    Title,
    /// "Refresh Now": immediate fetch.
    RefreshNow,
    /// "Refresh Interval" submenu built from the interval choice table.
    IntervalPicker,
    Separator,
    Quit,
}

/// Dropdown layout in display order: four logical entries plus the one
/// separator before Quit.
pub const MENU_LAYOUT: [MenuEntry; 5] = [
    MenuEntry::Title,
    MenuEntry::RefreshNow,
    MenuEntry::IntervalPicker,
    MenuEntry::Separator,
    MenuEntry::Quit,
];
