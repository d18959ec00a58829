//! Cancelable one-shot timers delivered as bubbletea commands.
//!
//! A scheduled timer is a [`Cmd`] that sleeps and then yields a message,
//! paired with a [`ScheduledTimer`] handle. Cancelling or dropping the handle
//! makes the command resolve to nothing, so the owner of the handle decides
//! whether the callback may still fire.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;
use tokio::sync::oneshot;

use crate::telemetry::duration_millis;

/// Handle for a scheduled message. Dropping it cancels the timer.
#[derive(Debug)]
pub struct ScheduledTimer {
    cancel: Option<oneshot::Sender<()>>,
    delay: Duration,
}

impl ScheduledTimer {
    /// Schedules `message` to be delivered after `delay`.
    ///
    /// Returns the handle and the command to hand to the runtime.
    #[must_use]
    pub fn schedule<M>(delay: Duration, message: M) -> (Self, Cmd)
    where
        M: Any + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let cmd: Cmd = Box::pin(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => {
                    Some(Box::new(message) as Box<dyn Any + Send>)
                }
                _ = cancel_rx => None,
            }
        });
        tracing::debug!(delay_ms = duration_millis(delay), "timer armed");

        (
            Self {
                cancel: Some(cancel_tx),
                delay,
            },
            cmd,
        )
    }

    /// Cancels the timer. Cancelling twice is a no-op.
    pub fn cancel(&mut self) {
        let Some(sender) = self.cancel.take() else {
            return;
        };
        if sender.send(()).is_ok() {
            tracing::debug!(delay_ms = duration_millis(self.delay), "timer cancelled");
        }
    }

    /// Returns true while the timer may still fire.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|sender| !sender.is_closed())
    }

    /// Returns the delay this timer was scheduled with.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for ScheduledTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ScheduledTimer;

    #[derive(Debug, PartialEq, Eq)]
    struct Ping(u8);

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let started = tokio::time::Instant::now();
        let (handle, cmd) = ScheduledTimer::schedule(Duration::from_secs(5), Ping(1));

        assert!(handle.is_armed());
        let msg = cmd.await.expect("timer should fire");

        assert_eq!(msg.downcast_ref::<Ping>(), Some(&Ping(1)));
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert!(!handle.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_yields_nothing() {
        let (mut handle, cmd) = ScheduledTimer::schedule(Duration::from_secs(5), Ping(2));
        handle.cancel();
        handle.cancel();

        assert!(cmd.await.is_none());
        assert!(!handle.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let (handle, cmd) = ScheduledTimer::schedule(Duration::from_secs(30), Ping(3));
        drop(handle);

        assert!(cmd.await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_partial_wait_prevents_delivery() {
        let (mut handle, cmd) = ScheduledTimer::schedule(Duration::from_secs(5), Ping(4));
        let pending = tokio::spawn(cmd);

        tokio::time::sleep(Duration::from_secs(4)).await;
        handle.cancel();

        let delivered = pending.await.expect("timer task should join");
        assert!(delivered.is_none());
    }
}
