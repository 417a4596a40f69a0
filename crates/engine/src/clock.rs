//! Fixed-rate tick scheduling for hosts without an animation-frame primitive.

use std::time::{Duration, Instant};

use crate::driver::TickScheduler;

/// Fires at most one tick per interval, and only after one was requested.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_due: Instant,
    pending: bool,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
            pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick has been requested and not yet taken.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// How long the host may wait (e.g. for input) before the next tick.
    ///
    /// With no tick pending the host has nothing to wake for; the interval is
    /// returned so input polling still makes progress.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        if !self.pending {
            return self.interval;
        }
        self.next_due.saturating_duration_since(now)
    }

    /// Consume the pending request if it is due.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if !self.pending || now < self.next_due {
            return false;
        }
        self.pending = false;
        // Skip missed frames instead of bursting to catch up.
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}

impl TickScheduler for FrameClock {
    fn request_tick(&mut self) {
        self.pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_due_without_request() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16 * MS, t0);
        assert!(!clock.take_due(t0 + 100 * MS));
    }

    #[test]
    fn first_request_is_due_immediately() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16 * MS, t0);
        clock.request_tick();
        assert_eq!(clock.time_until_due(t0), Duration::ZERO);
        assert!(clock.take_due(t0));
        assert!(!clock.is_pending());
    }

    #[test]
    fn subsequent_ticks_wait_one_interval() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16 * MS, t0);
        clock.request_tick();
        assert!(clock.take_due(t0));

        clock.request_tick();
        assert_eq!(clock.time_until_due(t0 + 6 * MS), 10 * MS);
        assert!(!clock.take_due(t0 + 15 * MS));
        assert!(clock.take_due(t0 + 16 * MS));
    }

    #[test]
    fn late_tick_does_not_burst() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16 * MS, t0);
        clock.request_tick();
        assert!(clock.take_due(t0 + 100 * MS));

        clock.request_tick();
        assert!(!clock.take_due(t0 + 101 * MS));
        assert!(clock.take_due(t0 + 116 * MS));
    }
}
