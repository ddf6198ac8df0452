//! Compile-time table of selectable polling intervals.

/// One selectable polling frequency: menu label, period in seconds and the
/// single-character menu shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalChoice {
    pub label: &'static str,
    pub seconds: i64,
    pub key: &'static str,
}

/// Fixed set of interval choices, in menu order.
pub const INTERVAL_CHOICES: [IntervalChoice; 2] = [
    IntervalChoice {
        label: "Every Minute",
        seconds: 60,
        key: "1",
    },
    IntervalChoice {
        label: "Every Hour",
        seconds: 3600,
        key: "2",
    },
];

/// Look up the choice matching a stored interval, if any.
///
/// A stored value matching no choice is legal; the menu simply shows no
/// checkmark for it.
pub fn choice_for_seconds(seconds: i64) -> Option<&'static IntervalChoice> {
    INTERVAL_CHOICES.iter().find(|c| c.seconds == seconds)
}
