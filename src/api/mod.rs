//! Price fetching: the CoinGecko HTTP client and the background fetch
//! worker that runs it off the UI thread.

pub mod coingecko;
pub mod worker;

pub use coingecko::{fetch_price, parse_price_body};
pub use worker::{init_fetch_worker, request_refresh};
