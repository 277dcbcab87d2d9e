//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cached responses.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::cache::ResponseCache;

/// Spawns a background task that sweeps expired entries every `check_period_secs`.
///
/// Each sweep runs as its own child task. A panicking sweep is logged and the
/// loop carries on with the next tick.
///
/// # Returns
/// A JoinHandle for the loop, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = ResponseCache::new();
/// let sweep_handle = spawn_sweep_task(cache.clone(), 60);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: ResponseCache, check_period_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(check_period_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let cache = cache.clone();
            match sweep_once(async move { cache.sweep_expired().await }).await {
                Some(0) => debug!("Cache sweep: no expired entries found"),
                Some(removed) => info!("Cache sweep: removed {} expired entries", removed),
                None => {}
            }
        }
    })
}

/// Runs one sweep in isolation, turning a panic into a logged `None`.
async fn sweep_once<F>(job: F) -> Option<usize>
where
    F: Future<Output = usize> + Send + 'static,
{
    match tokio::spawn(job).await {
        Ok(removed) => Some(removed),
        Err(err) => {
            error!(error = %err, "Cache sweep failed; retrying on next tick");
            None
        }
    }
}
