//! Frame pacing for the animation engine.
//!
//! The timer only answers "has the interval elapsed since the last reset";
//! the caller owns the clock and passes `now` in explicitly, so the core
//! stays portable and deterministic under test.

use embassy_time::{Duration, Instant};

/// Convert a refresh rate (refreshes per second) into a frame interval.
///
/// `round(1000 / speed)` milliseconds. The caller must guarantee
/// `speed > 0`; rates above 2 kHz collapse to a zero interval, which makes
/// the timer due on every check.
pub fn speed_to_interval(speed: f32) -> Duration {
    Duration::from_millis(libm::roundf(1000.0 / speed) as u64)
}

/// Periodic-trigger primitive with a runtime-adjustable interval.
///
/// Decouples "how often to animate" from "when was the last frame drawn":
/// an interval change takes effect on the next [`is_due`](Self::is_due)
/// evaluation instead of waiting for the in-flight interval to finish.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last_reset: Instant,
    interval: Duration,
}

impl FrameTimer {
    /// Create a timer with the given interval.
    ///
    /// The last-reset epoch starts at millisecond zero, so the first frame
    /// becomes due one interval after boot.
    pub const fn new(interval: Duration) -> Self {
        Self {
            last_reset: Instant::from_millis(0),
            interval,
        }
    }

    /// Has at least one interval elapsed since the last reset?
    ///
    /// A timer with interval 0 is due on every call.
    pub fn is_due(&self, now: Instant) -> bool {
        now.as_millis().saturating_sub(self.last_reset.as_millis())
            >= self.interval.as_millis()
    }

    /// Record `now` as the start of the next interval.
    pub fn reset(&mut self, now: Instant) {
        self.last_reset = now;
    }

    /// Replace the interval. Affects the next `is_due` evaluation only.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Current frame interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
