//! The recurring autoplay timer.
//!
//! The app is driven by its host loop: each update reports the time elapsed
//! since the previous one, and the timer answers how many autoplay intervals
//! have completed. The timer exists only while autoplay runs; dropping it is
//! the cancellation, so no stale tick can reach a lesson it was not started
//! for.

use std::time::Duration;

/// A running autoplay timer.
#[derive(Debug)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    /// Starts a timer that fires every `interval`.
    ///
    /// A zero interval is treated as one millisecond.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        log::debug!("autoplay timer started, interval={interval:?}");
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the interval between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the time left until the next tick.
    #[must_use]
    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Advances the clock by `dt` and returns the number of ticks that fell
    /// due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut ticks = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            ticks += 1;
        }
        ticks
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        log::debug!("autoplay timer cancelled");
    }
}

/// Slot holding the timer of the current autoplay run, if any.
///
/// [`AutoplaySlot::sync`] starts or cancels the timer so that it runs exactly
/// while the playback says it is playing.
#[derive(Debug, Default)]
pub struct AutoplaySlot {
    timer: Option<AutoplayTimer>,
}

impl AutoplaySlot {
    /// Returns `true` if a timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns the running timer.
    #[must_use]
    pub fn timer(&self) -> Option<&AutoplayTimer> {
        self.timer.as_ref()
    }

    /// Starts a timer if `playing` and none is running; cancels the running
    /// timer if not `playing`.
    pub fn sync(&mut self, playing: bool, interval: Duration) {
        match (playing, self.timer.is_some()) {
            (true, false) => self.timer = Some(AutoplayTimer::start(interval)),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Cancels the running timer. Does nothing if none is running.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    /// Advances the running timer and returns the ticks that fell due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.timer.as_mut().map_or(0, |timer| timer.advance(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_timer_counts_whole_intervals() {
        let mut timer = AutoplayTimer::start(SECOND);
        assert_eq!(timer.advance(Duration::from_millis(400)), 0);
        assert_eq!(timer.until_next_tick(), Duration::from_millis(600));
        assert_eq!(timer.advance(Duration::from_millis(700)), 1);
        assert_eq!(timer.advance(Duration::from_millis(2_000)), 2);
        assert_eq!(timer.until_next_tick(), Duration::from_millis(900));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timer = AutoplayTimer::start(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
        assert_eq!(timer.advance(Duration::from_millis(3)), 3);
    }

    #[test]
    fn test_slot_sync_and_cancel() {
        let mut slot = AutoplaySlot::default();
        assert_eq!(slot.advance(SECOND), 0);

        slot.sync(true, SECOND);
        assert!(slot.is_running());
        slot.advance(Duration::from_millis(500));
        // Syncing while already running keeps the same timer.
        slot.sync(true, SECOND);
        assert_eq!(slot.advance(Duration::from_millis(500)), 1);

        slot.sync(false, SECOND);
        assert!(!slot.is_running());
        slot.cancel();
        assert!(!slot.is_running());
        assert_eq!(slot.advance(SECOND), 0);
    }
}
