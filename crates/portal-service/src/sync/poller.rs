//! Fixed-interval poller
//!
//! Re-runs a fetch closure on a fixed cadence (chat every
//! [`CHAT_REFRESH_INTERVAL`], dashboard every [`DASHBOARD_REFRESH_INTERVAL`]).
//! A tick is skipped, not queued, while the previous one is still running,
//! so a slow backend never piles up overlapping fetches.
//!
//! [`CHAT_REFRESH_INTERVAL`]: portal_common::CHAT_REFRESH_INTERVAL
//! [`DASHBOARD_REFRESH_INTERVAL`]: portal_common::DASHBOARD_REFRESH_INTERVAL

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Handle to a running poller; aborts the loop on drop
pub struct Poller {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Start polling `tick` every `interval`
    pub fn spawn<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let in_flight = Arc::new(AtomicBool::new(false));
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                timer.tick().await;

                if in_flight
                    .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                    .is_err()
                {
                    debug!(poller = name, "previous tick still in flight, skipping");
                    continue;
                }

                let flag = Arc::clone(&in_flight);
                let fut = tick();
                tokio::spawn(async move {
                    fut.await;
                    flag.store(false, Ordering::SeqCst);
                });
            }
        });

        Self { name, handle }
    }

    /// Stop the loop; in-flight tick work is left to finish
    pub fn stop(&self) {
        debug!(poller = self.name, "stopping");
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn test_ticks_run_repeatedly() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let poller = Poller::spawn("test", Duration::from_millis(10), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        poller.stop();
        assert!(count.load(Ordering::SeqCst) >= 3);
    }

    #[tokio::test]
    async fn test_slow_tick_skips_instead_of_piling_up() {
        let started = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&started);
        let _poller = Poller::spawn("slow", Duration::from_millis(10), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
                // far longer than the interval
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        });

        tokio::time::sleep(Duration::from_millis(120)).await;
        // one tick in flight the whole time, the rest skipped
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dropping_the_handle_stops_the_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        {
            let _poller = Poller::spawn("dropped", Duration::from_millis(10), move || {
                let seen = Arc::clone(&seen);
                async move {
                    seen.fetch_add(1, Ordering::SeqCst);
                }
            });
            tokio::time::sleep(Duration::from_millis(35)).await;
        }
        let at_drop = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), at_drop);
    }
}
