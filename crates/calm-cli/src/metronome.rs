//! Periodic tick source for a running breathing session.
//!
//! A [`Metronome`] exists exactly while the timer runs. Dropping it cancels the
//! background task and closes the channel, so no tick can be delivered after
//! release, whichever way the owner goes away.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};

pub struct Metronome {
    ticks: mpsc::Receiver<()>,
    _guard: DropGuard,
}

impl Metronome {
    /// Spawn the ticker. The first tick arrives one `period` from now.
    pub fn start(period: Duration) -> Self {
        let token = CancellationToken::new();
        let (tx, rx) = mpsc::channel(1);
        spawn_ticker(period, token.clone(), tx);
        tracing::debug!("metronome acquired ({}ms)", period.as_millis());
        Self {
            ticks: rx,
            _guard: token.drop_guard(),
        }
    }

    /// Wait for the next tick. `None` only if the ticker task died.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }
}

impl Drop for Metronome {
    fn drop(&mut self) {
        tracing::debug!("metronome released");
    }
}

fn spawn_ticker(
    period: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => {
                    tokio::select! {
                        _ = token.cancelled() => break,
                        sent = tx.send(()) => if sent.is_err() { break },
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_period() {
        let started = Instant::now();
        let mut metronome = Metronome::start(PERIOD);

        metronome.tick().await.unwrap();
        assert_eq!(started.elapsed(), PERIOD);
        metronome.tick().await.unwrap();
        assert_eq!(started.elapsed(), PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_task() {
        let token = CancellationToken::new();
        let (tx, mut rx) = mpsc::channel(1);
        let handle = spawn_ticker(PERIOD, token.clone(), tx);

        rx.recv().await.unwrap();
        token.cancel();
        handle.await.unwrap();
        assert!(rx.recv().await.is_none(), "no ticks after cancellation");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_stops_task() {
        let token = CancellationToken::new();
        let (tx, rx) = mpsc::channel(1);
        let handle = spawn_ticker(PERIOD, token, tx);

        drop(rx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_guard_cancels() {
        let token = CancellationToken::new();
        let (tx, _rx) = mpsc::channel(1);
        let handle = spawn_ticker(PERIOD, token.clone(), tx);

        drop(token.drop_guard());
        handle.await.unwrap();
    }
}
