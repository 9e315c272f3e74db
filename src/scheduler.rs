use std::time::{Duration, Instant};

/// Fixed-cadence tick source, kept apart from the deterministic game core.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl TickScheduler {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and starts the next period when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) < self.interval {
            return false;
        }

        self.last_tick = now;
        true
    }

    /// Time left until the next tick, zero when one is already due.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.duration_since(self.last_tick))
    }

    /// Restarts the current period, e.g. after a restart or resume.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }
}
