#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc2 macros

use tracing_subscriber::EnvFilter;

#[cfg(target_os = "macos")]
mod macos_main;

fn main() {
    // Log to stderr; the status item owns stdout-less UI anyway.
    // RUST_LOG=coinbar=debug for fetch tracing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Event bus and fetch worker come up before any UI exists, so the
    // first refresh has somewhere to go.
    coinbar::events::init_event_bus();
    coinbar::api::init_fetch_worker();

    #[cfg(target_os = "macos")]
    {
        macos_main::run();
    }

    #[cfg(not(target_os = "macos"))]
    {
        eprintln!("coinbar only runs on macOS (needs the AppKit status bar).");
        std::process::exit(1);
    }
}
