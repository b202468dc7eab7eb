//! Periodic tick source.
//!
//! A [`Ticker`] owns a background thread that sends one `()` per period.
//! Dropping it cancels the thread immediately; ticks already queued are
//! discarded with the receiver.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::error::TimerError;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable one-tick-per-period source.
pub struct Ticker {
    ticks: Receiver<()>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `period`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(period: Duration) -> Result<Self, TimerError> {
        let (tick_tx, ticks) = mpsc::channel();
        let (stop, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("studytimer-ticker".to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(()).is_err() {
                            break;
                        }
                        trace!("tick");
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        debug!(?period, "ticker started");
        Ok(Self {
            ticks,
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Take every pending tick without blocking. Returns how many there were.
    pub fn drain(&self) -> u32 {
        let mut count = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
            }
        }
    }

    /// Wait up to `timeout` for the next tick.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> bool {
        self.ticks.recv_timeout(timeout).is_ok()
    }

    /// Stop ticking now. Same as dropping.
    pub fn cancel(self) {}
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // closing the stop channel wakes the thread out of recv_timeout
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("ticker thread panicked");
            }
        }
        debug!("ticker cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_ticks_arrive() {
        let ticker = Ticker::spawn(Duration::from_millis(5)).unwrap();
        assert!(ticker.recv_timeout(Duration::from_secs(2)));
        assert!(ticker.recv_timeout(Duration::from_secs(2)));
    }

    #[test]
    fn test_drain_counts_pending() {
        let ticker = Ticker::spawn(Duration::from_millis(2)).unwrap();
        thread::sleep(Duration::from_millis(50));
        assert!(ticker.drain() >= 1);
    }

    #[test]
    fn test_drop_cancels_promptly() {
        let ticker = Ticker::spawn(Duration::from_secs(60)).unwrap();
        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_no_tick_before_period() {
        let ticker = Ticker::spawn(Duration::from_secs(60)).unwrap();
        assert_eq!(ticker.drain(), 0);
        assert!(!ticker.recv_timeout(Duration::from_millis(10)));
    }
}
