//! Scroll animation controller.
//!
//! [`ScrollAnimator`] drives a [`ScrollHost`]'s scroll offset along two
//! independent paths:
//!
//! * **eased runs**: `scroll_to` animates from the current offset to a
//!   resolved target over a fixed duration, shaped by an [`Easing`] curve.
//!   A new call cancels the pending run and restarts from wherever the
//!   document currently sits.
//! * **wheel smoothing**: once enabled, each wheel delta moves an
//!   accumulating target and a per-frame `lerp` pulls the offset toward it.
//!   The loop goes idle once it is within the settle threshold.
//!
//! Both paths request frames from a shared [`FrameQueue`]; the host calls
//! [`ScrollAnimator::on_frame`] once per display refresh.  Only the path
//! holding the active [`Driver`] slot writes the offset: `scroll_to` parks a
//! running wheel loop, and wheel input cancels an eased run.

use tracing::{debug, trace};

use crate::config::ScrollConfig;

use super::easing::Easing;
use super::frame::{FrameId, FrameQueue, FrameSlot};
use super::host::{resolve_target, ScrollHost, ScrollTarget};
use super::timing::{lerp, progress, Clock, MonotonicClock};

/// Per-call overrides for an eased run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOptions {
    /// Run duration; `None` uses the controller's configured duration.
    pub duration_secs: Option<f64>,
    /// Added to the resolved top of selector and element targets.
    pub offset: f64,
    /// Curve for this run; `None` uses the configured curve.
    pub easing: Option<Easing>,
}

impl ScrollOptions {
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Which path currently owns writes to the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Eased,
    Wheel,
}

/// One in-flight `scroll_to`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EasedRun {
    start_offset: f64,
    target_offset: f64,
    start_ms: f64,
    duration_secs: f64,
    easing: Easing,
}

/// Wheel-smoothing state.  Exists only while smoothing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelSmoothing {
    /// Accumulated wheel target, always within `[0, max_scroll]`.
    pub target_y: f64,
    /// Offset last written by the smoothing step.
    pub current_y: f64,
    /// `true` while a smoothing step is scheduled.
    pub running: bool,
}

/// Smooth-scroll controller for a single document.
pub struct ScrollAnimator<H: ScrollHost, C: Clock = MonotonicClock> {
    host: H,
    clock: C,
    config: ScrollConfig,
    frames: FrameQueue,
    eased: Option<EasedRun>,
    eased_frame: Option<FrameId>,
    wheel: Option<WheelSmoothing>,
    wheel_frame: Option<FrameId>,
    driver: Option<Driver>,
}

impl<H: ScrollHost> ScrollAnimator<H> {
    /// Controller on the real monotonic clock.
    pub fn new(host: H, config: ScrollConfig) -> Self {
        Self::with_clock(host, config, MonotonicClock::new())
    }
}

impl<H: ScrollHost, C: Clock> ScrollAnimator<H, C> {
    /// Controller on a caller-provided clock.  Wheel smoothing is enabled
    /// straight away when `config.smooth_enabled` is set.
    pub fn with_clock(host: H, config: ScrollConfig, clock: C) -> Self {
        let mut animator = Self {
            host,
            clock,
            config: config.sanitized(),
            frames: FrameQueue::new(),
            eased: None,
            eased_frame: None,
            wheel: None,
            wheel_frame: None,
            driver: None,
        };
        if animator.config.smooth_enabled {
            animator.enable_smooth_scroll();
        }
        animator
    }

    // ── accessors ──────────────────────────────────────────────

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to report a viewport resize.  Writing the
    /// scroll offset through this bypasses the animator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// `true` while an eased run is in flight.
    pub fn is_animating(&self) -> bool {
        self.eased.is_some()
    }

    pub fn is_smooth_enabled(&self) -> bool {
        self.wheel.is_some()
    }

    pub fn is_wheel_running(&self) -> bool {
        self.wheel.is_some_and(|w| w.running)
    }

    pub fn wheel_state(&self) -> Option<WheelSmoothing> {
        self.wheel
    }

    pub fn wheel_target(&self) -> Option<f64> {
        self.wheel.map(|w| w.target_y)
    }

    /// Target of the in-flight eased run.
    pub fn eased_target(&self) -> Option<f64> {
        self.eased.map(|run| run.target_offset)
    }

    pub fn active_driver(&self) -> Option<Driver> {
        self.driver
    }

    /// `true` when the host should deliver a frame soon.  Hosts can drop to
    /// an idle tick rate while this is `false`.
    pub fn wants_frame(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_frames_for(&self, slot: FrameSlot) -> usize {
        self.frames.count(slot)
    }

    // ── eased runs ─────────────────────────────────────────────

    /// Animate to `target`.
    ///
    /// A target that does not resolve to a finite offset is ignored: nothing
    /// is cancelled and no frame is requested.  Otherwise any in-flight run is
    /// cancelled and a new one starts from the current offset.
    pub fn scroll_to(&mut self, target: impl Into<ScrollTarget<H::Element>>, options: ScrollOptions) {
        let target = target.into();
        let Some(target_offset) = resolve_target(&self.host, &target, options.offset) else {
            debug!("scroll target did not resolve, ignoring");
            return;
        };
        if !target_offset.is_finite() {
            debug!(target_offset, "non-finite scroll target, ignoring");
            return;
        }
        self.start_run(target_offset, options);
    }

    /// Animate by `delta` relative to the in-flight target (or the current
    /// offset when idle), clamped to the scrollable range.
    pub fn scroll_by(&mut self, delta: f64, options: ScrollOptions) {
        if !delta.is_finite() {
            return;
        }
        let base = self
            .eased
            .map(|run| run.target_offset)
            .unwrap_or_else(|| self.host.scroll_offset());
        let target = (base + delta).clamp(0.0, self.host.max_scroll());
        self.start_run(target, options);
    }

    fn start_run(&mut self, target_offset: f64, options: ScrollOptions) {
        if self.cancel_eased() {
            debug!("eased scroll superseded");
        }
        self.park_wheel();

        let run = EasedRun {
            start_offset: self.host.scroll_offset(),
            target_offset,
            start_ms: self.clock.now_ms(),
            // An infinite duration would never reach progress 1.
            duration_secs: options
                .duration_secs
                .filter(|secs| secs.is_finite())
                .unwrap_or(self.config.duration_secs),
            easing: options.easing.unwrap_or(self.config.easing),
        };
        debug!(
            from = run.start_offset,
            to = run.target_offset,
            duration_secs = run.duration_secs,
            "eased scroll started"
        );
        self.eased = Some(run);
        self.driver = Some(Driver::Eased);
        self.eased_frame = Some(self.frames.request(FrameSlot::Eased));
    }

    /// Drop the in-flight run and its pending frame.  Returns `true` if there
    /// was one.
    fn cancel_eased(&mut self) -> bool {
        if let Some(id) = self.eased_frame.take() {
            self.frames.cancel(id);
        }
        if self.driver == Some(Driver::Eased) {
            self.driver = None;
        }
        self.eased.take().is_some()
    }

    fn step_eased(&mut self) {
        let Some(run) = self.eased else {
            return;
        };
        let elapsed = self.clock.now_ms() - run.start_ms;
        let p = progress(elapsed, run.duration_secs);

        if p >= 1.0 {
            self.host.set_scroll_offset(run.target_offset);
            self.eased = None;
            if self.driver == Some(Driver::Eased) {
                self.driver = None;
            }
            debug!(offset = run.target_offset, "eased scroll finished");
            return;
        }

        let value = lerp(run.start_offset, run.target_offset, run.easing.apply(p));
        trace!(progress = p, offset = value, "eased frame");
        self.host.set_scroll_offset(value);
        self.eased_frame = Some(self.frames.request(FrameSlot::Eased));
    }

    // ── wheel smoothing ────────────────────────────────────────

    /// Start intercepting wheel input.  Calling this again while enabled does
    /// nothing.
    pub fn enable_smooth_scroll(&mut self) {
        if self.wheel.is_some() {
            return;
        }
        let y = self.host.scroll_offset();
        self.wheel = Some(WheelSmoothing {
            target_y: y,
            current_y: y,
            running: false,
        });
        self.host.set_wheel_capture(true);
        debug!(offset = y, "wheel smoothing enabled");
    }

    /// Feed one wheel event.  Returns `false` when smoothing is disabled, in
    /// which case the host should scroll natively.
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        if self.wheel.is_none() {
            return false;
        }
        if !delta_y.is_finite() {
            return true;
        }

        if self.driver == Some(Driver::Eased) {
            self.cancel_eased();
            debug!("wheel input interrupted eased scroll");
        }

        let offset = self.host.scroll_offset();
        let max = self.host.max_scroll();
        let Some(wheel) = self.wheel.as_mut() else {
            return false;
        };

        // Something else moved the document since the last step.
        if !wheel.running && wheel.current_y != offset {
            wheel.current_y = offset;
            wheel.target_y = offset;
        }

        wheel.target_y = (wheel.target_y + delta_y).clamp(0.0, max);
        trace!(delta_y, target = wheel.target_y, "wheel");

        if !wheel.running {
            wheel.running = true;
            self.driver = Some(Driver::Wheel);
            self.wheel_frame = Some(self.frames.request(FrameSlot::Wheel));
        }
        true
    }

    /// Stop a running smoothing loop without forgetting its state.
    fn park_wheel(&mut self) {
        if let Some(id) = self.wheel_frame.take() {
            self.frames.cancel(id);
        }
        if let Some(wheel) = self.wheel.as_mut() {
            if wheel.running {
                wheel.running = false;
                debug!("wheel smoothing parked");
            }
        }
        if self.driver == Some(Driver::Wheel) {
            self.driver = None;
        }
    }

    fn step_wheel(&mut self) {
        let factor = self.config.wheel_lerp;
        let threshold = self.config.settle_threshold;
        let Some(wheel) = self.wheel.as_mut() else {
            return;
        };
        if !wheel.running {
            return;
        }

        wheel.current_y = lerp(wheel.current_y, wheel.target_y, factor);
        self.host.set_scroll_offset(wheel.current_y);

        if (wheel.target_y - wheel.current_y).abs() > threshold {
            self.wheel_frame = Some(self.frames.request(FrameSlot::Wheel));
        } else {
            wheel.running = false;
            if self.driver == Some(Driver::Wheel) {
                self.driver = None;
            }
            trace!(offset = wheel.current_y, "wheel smoothing idle");
        }
    }

    // ── frame pump ─────────────────────────────────────────────

    /// Run every frame callback requested before this call.
    pub fn on_frame(&mut self) {
        for (id, slot) in self.frames.take_due() {
            match slot {
                FrameSlot::Eased if self.eased_frame == Some(id) => {
                    self.eased_frame = None;
                    self.step_eased();
                }
                FrameSlot::Wheel if self.wheel_frame == Some(id) => {
                    self.wheel_frame = None;
                    self.step_wheel();
                }
                _ => trace!(?slot, "stale frame request dropped"),
            }
        }
    }

    // ── teardown ───────────────────────────────────────────────

    /// Cancel everything and detach the wheel listener.  Safe to call any
    /// number of times.
    pub fn destroy(&mut self) {
        self.cancel_eased();
        if let Some(id) = self.wheel_frame.take() {
            self.frames.cancel(id);
        }
        if self.wheel.take().is_some() {
            debug!("wheel smoothing disabled");
        }
        self.driver = None;
        self.host.set_wheel_capture(false);
    }
}
