//! Tests for the model layer (TickerState and interval choices).

use coinbar::api::parse_price_body;
use coinbar::model::app_state::TickerState;
use coinbar::model::constants::*;
use coinbar::model::{choice_for_seconds, MenuEntry, INTERVAL_CHOICES, MENU_LAYOUT};

// === Default Values Tests ===

#[test]
fn ticker_state_default_interval_is_hourly() {
    let state = TickerState::default();
    assert_eq!(state.interval_secs, DEFAULT_INTERVAL_SECS);
}

#[test]
fn ticker_state_default_title_is_loading() {
    let state = TickerState::default();
    assert_eq!(state.title, LOADING_TITLE);
}

// === Interval Tests ===

#[test]
fn set_interval_updates_state() {
    let mut state = TickerState::default();
    state.set_interval(60);
    assert_eq!(state.interval_secs, 60);
}

#[test]
fn is_active_matches_current_interval_only() {
    let mut state = TickerState::default();
    state.set_interval(60);
    assert!(state.is_active(&INTERVAL_CHOICES[0]));
    assert!(!state.is_active(&INTERVAL_CHOICES[1]));

    state.set_interval(3600);
    assert!(!state.is_active(&INTERVAL_CHOICES[0]));
    assert!(state.is_active(&INTERVAL_CHOICES[1]));
}

#[test]
fn default_interval_matches_a_menu_choice() {
    assert!(choice_for_seconds(DEFAULT_INTERVAL_SECS).is_some());
}

// === Interval Choice Table Tests ===

#[test]
fn interval_choices_are_minute_then_hour() {
    assert_eq!(INTERVAL_CHOICES[0].label, "Every Minute");
    assert_eq!(INTERVAL_CHOICES[0].seconds, 60);
    assert_eq!(INTERVAL_CHOICES[1].label, "Every Hour");
    assert_eq!(INTERVAL_CHOICES[1].seconds, 3600);
}

#[test]
fn interval_choice_keys_are_distinct() {
    assert_ne!(INTERVAL_CHOICES[0].key, INTERVAL_CHOICES[1].key);
}

#[test]
fn choice_for_seconds_finds_known_intervals() {
    assert_eq!(choice_for_seconds(60).map(|c| c.label), Some("Every Minute"));
    assert_eq!(choice_for_seconds(3600).map(|c| c.label), Some("Every Hour"));
}

#[test]
fn choice_for_seconds_rejects_unknown_interval() {
    assert!(choice_for_seconds(0).is_none());
    assert!(choice_for_seconds(120).is_none());
    assert!(choice_for_seconds(-60).is_none());
}

// === Menu Layout Tests ===

#[test]
fn menu_order_is_title_refresh_intervals_separator_quit() {
    assert_eq!(
        MENU_LAYOUT,
        [
            MenuEntry::Title,
            MenuEntry::RefreshNow,
            MenuEntry::IntervalPicker,
            MenuEntry::Separator,
            MenuEntry::Quit,
        ]
    );
}

#[test]
fn menu_has_exactly_one_separator() {
    let separators = MENU_LAYOUT
        .iter()
        .filter(|e| **e == MenuEntry::Separator)
        .count();
    assert_eq!(separators, 1);
}

#[test]
fn title_is_followed_directly_by_refresh_now() {
    assert_eq!(MENU_LAYOUT[0], MenuEntry::Title);
    assert_eq!(MENU_LAYOUT[1], MenuEntry::RefreshNow);
}

// === Status Font Tests ===

#[test]
fn status_font_is_semibold_twelve_point() {
    assert_eq!(STATUS_FONT_SIZE, 12.0);
    // NSFontWeightSemibold
    assert_eq!(FONT_WEIGHT_SEMIBOLD, 0.3);
}

// === Price Application Tests ===

#[test]
fn apply_price_formats_title() {
    let mut state = TickerState::default();
    state.apply_price(65432);
    assert_eq!(state.title, "$ 65,432");
}

#[test]
fn apply_price_zero_shows_zero_dollars() {
    let mut state = TickerState::default();
    state.apply_price(0);
    assert_eq!(state.title, "$ 0");
}

#[test]
fn apply_price_replaces_previous_title() {
    let mut state = TickerState::default();
    state.apply_price(100);
    state.apply_price(200);
    assert_eq!(state.title, "$ 200");
}

#[test]
fn failed_fetch_leaves_label_untouched() {
    let mut state = TickerState::default();
    state.apply_price(65432);
    let before = state.clone();

    // A body that fails the typed parse yields no price to apply.
    let result = parse_price_body("not json");
    assert!(result.is_err());
    if let Ok(usd) = result {
        state.apply_price(usd);
    }

    assert_eq!(state, before);
    assert_eq!(state.title, "$ 65,432");
}
