// Scoped periodic task
//
// Spawns a tokio task that posts a message into the app's channel on a
// fixed period. The task lives exactly as long as the handle: dropping it
// aborts the task, so no tick can arrive after the owning view unmounts.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owned timer handle; aborts its task on drop
#[derive(Debug)]
pub struct ScopedInterval {
    handle: JoinHandle<()>,
}

impl ScopedInterval {
    /// Start posting `message()` every `period`. The first message arrives
    /// one full period after spawning.
    pub fn spawn<M, F>(period: Duration, tx: mpsc::UnboundedSender<M>, message: F) -> Self
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(message()).is_err() {
                    // Receiver gone, nothing left to notify
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = ScopedInterval::spawn(Duration::from_secs(3), tx, || 7u8);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.try_recv().ok(), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = ScopedInterval::spawn(Duration::from_secs(1), tx, || ());
        drop(timer);

        tokio::time::sleep(Duration::from_secs(5)).await;
        // Sender was dropped with the aborted task
        assert!(rx.recv().await.is_none());
    }
}
