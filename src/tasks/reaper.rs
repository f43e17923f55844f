//! Cache Reaper Task
//!
//! Background task that periodically sweeps expired entries out of a cache.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::WeakExpiringCache;

/// Spawns the reaper for one cache onto `runtime`.
///
/// The task runs its first sweep at `first_sweep` and then one per
/// `interval`. It exits when the returned handle asks it to stop or when the
/// cache itself has been dropped. A dropped handle detaches the task.
///
/// # Arguments
/// * `runtime` - Runtime the task is spawned on
/// * `weak` - Weak reference to the cache to sweep
/// * `first_sweep` - Deadline of the first sweep
/// * `interval` - Period between sweeps
pub(crate) fn spawn_reaper(
    runtime: &Handle,
    weak: WeakExpiringCache,
    first_sweep: Instant,
    interval: Duration,
) -> ReaperHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let join = runtime.spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            "Starting cache reaper"
        );

        let mut ticker = interval_at(first_sweep, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut attached = true;

        loop {
            tokio::select! {
                biased;

                changed = stop_rx.changed(), if attached => {
                    match changed {
                        Ok(()) if *stop_rx.borrow() => break,
                        Ok(()) => {}
                        Err(_) => {
                            debug!("Reaper handle dropped, reaper detached");
                            attached = false;
                        }
                    }
                    continue;
                }
                _ = ticker.tick() => {}
            }

            let Some(cache) = weak.upgrade() else {
                debug!("Cache dropped, reaper exiting");
                break;
            };

            let removed = cache.reap();
            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }

        debug!("Cache reaper stopped");
    });

    ReaperHandle {
        stop: stop_tx,
        join,
    }
}

// == Reaper Handle ==
/// Controls the reaper task of an [`ExpiringCache`](crate::cache::ExpiringCache).
///
/// Dropping the handle detaches the reaper: it keeps sweeping until every
/// clone of the cache is gone. Call [`stop`](Self::stop) or
/// [`shutdown`](Self::shutdown) to end it earlier.
#[derive(Debug)]
#[must_use = "dropping the handle detaches the reaper; keep it to stop the task"]
pub struct ReaperHandle {
    stop: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl ReaperHandle {
    /// Asks the reaper to stop without waiting for it.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    /// Stops the reaper and waits for the task to finish.
    pub async fn shutdown(self) {
        self.stop();
        if let Err(err) = self.join.await {
            warn!("Cache reaper ended abnormally: {}", err);
        }
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::ExpiringCache;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_expired_entries() {
        let (cache, handle) = ExpiringCache::start(Duration::from_millis(50)).unwrap();

        cache.add("expire_soon", "value");

        // Sweeps at 50ms (age not yet over) and 100ms (expired)
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(cache.get("expire_soon"), None);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_valid_entries() {
        let (cache, handle) = ExpiringCache::start(Duration::from_secs(1)).unwrap();

        cache.add("long_lived", "value");

        // One sweep at 1s sees an age equal to the interval
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get("long_lived"), Some(b"value".to_vec()));
        assert_eq!(cache.stats().sweeps, 1);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_sweeps_once_per_interval() {
        let (cache, handle) = ExpiringCache::start(Duration::from_millis(100)).unwrap();

        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(cache.stats().sweeps, 3);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_can_be_stopped() {
        let (cache, handle) = ExpiringCache::start(Duration::from_millis(50)).unwrap();

        handle.stop();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(handle.is_finished(), "Reaper should be finished after stop");

        cache.add("k", "v");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(cache.get("k"), Some(b"v".to_vec()));
        assert_eq!(cache.stats().sweeps, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_keeps_reaper_running() {
        let (cache, handle) = ExpiringCache::start(Duration::from_millis(50)).unwrap();

        drop(handle);
        cache.add("x", "value");
        tokio::time::sleep(Duration::from_millis(160)).await;

        assert_eq!(cache.get("x"), None);
        assert_eq!(cache.stats().sweeps, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_cache_ends_reaper() {
        let (cache, handle) = ExpiringCache::start(Duration::from_millis(50)).unwrap();

        drop(cache);
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(handle.is_finished());
    }
}
