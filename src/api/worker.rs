//! Background fetch worker.
//!
//! A dedicated thread owns a tokio runtime and listens on a command
//! channel. Each refresh command spawns an independent task, so a slow
//! fetch never delays the next one; overlapping completions race and the
//! last writer wins on the label. Results cross back to the main thread
//! through the event bus. Failures are logged at debug level and dropped,
//! leaving the previous label untouched.

use std::sync::OnceLock;
use std::thread;

use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error};

use crate::events::{publish, AppEvent};

use super::coingecko::fetch_price;

/// Commands accepted by the fetch worker.
#[derive(Debug, Clone, Copy)]
enum FetchCommand {
    /// Fetch the price once and publish the result.
    Refresh,
}

static COMMANDS: OnceLock<UnboundedSender<FetchCommand>> = OnceLock::new();

/// Start the fetch worker thread. Must be called exactly once at startup,
/// after the event bus is initialized.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_fetch_worker() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    COMMANDS
        .set(tx)
        .expect("Fetch worker already initialized");

    thread::Builder::new()
        .name("fetch-worker".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!(error = %e, "failed to start fetch runtime");
                    return;
                }
            };

            runtime.block_on(async move {
                while let Some(FetchCommand::Refresh) = rx.recv().await {
                    // Spawned, not awaited: in-flight fetches are never
                    // cancelled and may overlap.
                    tokio::spawn(async {
                        match fetch_price().await {
                            Ok(usd) => publish(AppEvent::PriceUpdated(usd)),
                            // Silent-failure policy: no retry, no user-visible
                            // error; the next refresh is the recovery path.
                            Err(e) => debug!(error = %e, "price fetch failed"),
                        }
                    });
                }
            });
        })
        .expect("failed to spawn fetch worker thread");
}

/// Queue one refresh. Never blocks; the result (if any) arrives on the
/// event bus.
///
/// # Panics
///
/// Panics if `init_fetch_worker()` has not been called.
pub fn request_refresh() {
    let tx = COMMANDS
        .get()
        .expect("Fetch worker not initialized - call init_fetch_worker() first");

    // Ignore send errors - worker gone means the app is shutting down
    let _ = tx.send(FetchCommand::Refresh);
}
