//! Time and interpolation helpers.
//!
//! The animator never reads the system clock directly; it asks a [`Clock`].
//! [`MonotonicClock`] is the real thing, [`ManualClock`] is advanced by hand
//! so frames can be stepped deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic high-resolution time source, in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock.  Clones share the same time cell, so a test can keep
/// one handle while the animator owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Linear interpolation: `from + (to - from) * t`.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Normalised progress of a run, clamped to `[0, 1]`.
///
/// A zero or negative duration is already complete.
#[inline]
pub fn progress(elapsed_ms: f64, duration_secs: f64) -> f64 {
    let duration_ms = duration_secs * 1000.0;
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}
