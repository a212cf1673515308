//! # Idle Watchdog
//!
//! Per-session timer that detects a silent connection.
//!
//! The watchdog measures inter-message silence, not total session age:
//! the session loop re-arms it on every inbound frame, and an expiry is
//! delivered to the loop as a message on a channel rather than through
//! shared mutable state.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Idle timer for one streaming session
///
/// At most one timer is live at a time: [`arm`](Watchdog::arm) cancels any
/// pending timer before starting a new one, so there are no overlapping or
/// duplicate fires. Dropping the watchdog disarms it.
pub struct Watchdog {
    /// Silence bound before the timer fires
    timeout: Duration,
    /// Expiry signal sender, one message per fire
    expired_tx: mpsc::Sender<()>,
    /// Currently pending timer task, if armed
    pending: Option<JoinHandle<()>>,
}

impl Watchdog {
    /// Create a watchdog and the receiver its expiry is delivered on
    pub fn new(timeout: Duration) -> (Self, mpsc::Receiver<()>) {
        let (expired_tx, expired_rx) = mpsc::channel(1);

        (
            Self {
                timeout,
                expired_tx,
                pending: None,
            },
            expired_rx,
        )
    }

    /// Start the timer, cancelling any pending one first
    ///
    /// The expiry window always restarts from now; it never accumulates.
    pub fn arm(&mut self) {
        self.disarm();

        let timeout = self.timeout;
        let expired_tx = self.expired_tx.clone();

        self.pending = Some(tokio::spawn(async move {
            sleep(timeout).await;
            let _ = expired_tx.send(()).await;
        }));
    }

    /// Cancel a pending timer without firing it
    pub fn disarm(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_timeout() {
        let (mut watchdog, mut expired) = Watchdog::new(Duration::from_secs(30));
        watchdog.arm();

        assert!(expired.recv().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_cancels_pending_timer() {
        let (mut watchdog, mut expired) = Watchdog::new(Duration::from_secs(30));
        watchdog.arm();
        watchdog.disarm();

        advance(Duration::from_secs(120)).await;
        yield_now().await;

        assert!(expired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_restarts_the_window() {
        let (mut watchdog, mut expired) = Watchdog::new(Duration::from_secs(30));
        watchdog.arm();

        // Just short of expiry, re-arm; the old timer must not fire
        advance(Duration::from_secs(29)).await;
        watchdog.arm();

        advance(Duration::from_secs(29)).await;
        yield_now().await;
        assert!(expired.try_recv().is_err());

        // The fresh window expires 30s after the re-arm
        advance(Duration::from_secs(2)).await;
        assert!(expired.recv().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_fire_per_arm_cycle() {
        let (mut watchdog, mut expired) = Watchdog::new(Duration::from_secs(30));
        watchdog.arm();

        advance(Duration::from_secs(300)).await;

        assert!(expired.recv().await.is_some());
        yield_now().await;
        assert!(expired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_disarms() {
        let (mut watchdog, mut expired) = Watchdog::new(Duration::from_secs(30));
        watchdog.arm();
        drop(watchdog);

        advance(Duration::from_secs(120)).await;
        yield_now().await;

        // Sender side is gone and the timer was aborted
        assert!(expired.recv().await.is_none());
    }
}
