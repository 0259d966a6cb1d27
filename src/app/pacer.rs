//! Frame deadline bookkeeping for the main loop.
//!
//! The loop sleeps until [`FramePacer::deadline`].  While the animator wants
//! frames the deadline is one frame interval away, otherwise one idle tick.
//! Input only ever pulls the deadline in, never pushes it back.

use std::time::{Duration, Instant};

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_interval: Duration,
    idle_tick: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(config: &AppConfig, now: Instant) -> Self {
        let idle_tick = config.idle_tick();
        Self {
            frame_interval: config.frame_interval(),
            idle_tick,
            next_frame: now + idle_tick,
        }
    }

    fn wait(&self, wants_frame: bool) -> Duration {
        if wants_frame {
            self.frame_interval
        } else {
            self.idle_tick
        }
    }

    /// Bring the deadline forward if an animation just started.
    pub fn arm(&mut self, now: Instant, wants_frame: bool) {
        self.next_frame = self.next_frame.min(now + self.wait(wants_frame));
    }

    /// Schedule the next deadline after a frame was stepped.
    pub fn frame_done(&mut self, now: Instant, wants_frame: bool) {
        self.next_frame = now + self.wait(wants_frame);
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }
}
