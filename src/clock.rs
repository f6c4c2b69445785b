//! Monotonic time helpers.
//!
//! Every component is polled with the current [`Instant`] and decides on its
//! own whether enough time has passed. All arithmetic is done on the raw
//! tick counter with wrapping operations, so a counter wraparound never
//! stalls a timer or panics. Millisecond values derived from ticks do not
//! wrap at a power of two and are never subtracted directly.

use embassy_time::{Duration, Instant};

/// Time elapsed from `since` to `now`, tolerant of wraparound.
#[inline]
pub const fn elapsed(now: Instant, since: Instant) -> Duration {
    Duration::from_ticks(now.as_ticks().wrapping_sub(since.as_ticks()))
}

/// Milliseconds elapsed from `since` to `now`, tolerant of wraparound.
#[inline]
pub const fn elapsed_ms(now: Instant, since: Instant) -> u64 {
    elapsed(now, since).as_millis()
}

/// `instant` moved forward by `duration`, wrapping at the end of the counter
#[inline]
pub const fn wrapping_add(instant: Instant, duration: Duration) -> Instant {
    Instant::from_ticks(instant.as_ticks().wrapping_add(duration.as_ticks()))
}

/// Signed ticks from `now` until `deadline`
///
/// Negative once the deadline has passed. Valid while the two instants are
/// less than half the counter range apart.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn ticks_until(deadline: Instant, now: Instant) -> i64 {
    deadline.as_ticks().wrapping_sub(now.as_ticks()) as i64
}

/// Periodic trigger polled from the main loop.
///
/// [`IntervalTimer::ready`] returns `true` once per elapsed period and
/// re-arms from the instant it fired.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    period: Duration,
    last: Instant,
}

impl IntervalTimer {
    /// Create a timer whose first period starts at `start`
    pub const fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last: start,
        }
    }

    /// Returns `true` if a full period has elapsed since the last trigger
    pub fn ready(&mut self, now: Instant) -> bool {
        if elapsed_ms(now, self.last) < self.period.as_millis() {
            return false;
        }
        self.last = now;
        true
    }

    /// Restart the current period at `now`
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    pub const fn period(&self) -> Duration {
        self.period
    }
}
