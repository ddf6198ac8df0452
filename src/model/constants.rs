//! Configuration constants and default values.

// === Defaults ===

/// Default polling interval in seconds (one hour).
pub const DEFAULT_INTERVAL_SECS: i64 = 3600;

/// Placeholder title shown until the first successful fetch.
pub const LOADING_TITLE: &str = "Loading...";

/// Application name, used as the menu header.
pub const APP_NAME: &str = "Coinbar";

/// Status item title font size in points.
pub const STATUS_FONT_SIZE: f64 = 12.0;

/// Raw value of NSFontWeightSemibold.
pub const FONT_WEIGHT_SEMIBOLD: f64 = 0.3;

// === NSUserDefaults Keys ===

/// Key for the polling interval preference.
pub const PREF_INTERVAL: &str = "interval";

// === Network ===

/// CoinGecko simple-price endpoint for the BTC/USD spot price.
pub const PRICE_ENDPOINT: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

// === Timers ===

/// Period of the main-thread event pump timer in seconds.
pub const EVENT_PUMP_SECS: f64 = 0.25;
