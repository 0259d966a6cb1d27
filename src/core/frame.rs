//! Before-next-frame callback scheduling.
//!
//! A [`FrameQueue`] is the animator's stand-in for the host's display-refresh
//! scheduler.  Requests made before a frame run on that frame; requests made
//! while a frame is running wait for the next one.

/// Opaque handle for a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

/// Which animation path a frame request belongs to.  Each path owns at most
/// one pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSlot {
    /// One-shot eased `scroll_to` run.
    Eased,
    /// Continuous wheel-smoothing loop.
    Wheel,
}

/// Pending frame requests in request order.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<(FrameId, FrameSlot)>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `slot` to run on the next frame.
    pub fn request(&mut self, slot: FrameSlot) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push((id, slot));
        id
    }

    /// Drop a pending request.  Unknown or already-run ids are ignored.
    pub fn cancel(&mut self, id: FrameId) {
        self.pending.retain(|(pending, _)| *pending != id);
    }

    /// Take every request that is due on this frame, leaving the queue empty
    /// for requests made while they run.
    pub fn take_due(&mut self) -> Vec<(FrameId, FrameSlot)> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self, id: FrameId) -> bool {
        self.pending.iter().any(|(pending, _)| *pending == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending requests for one slot.
    pub fn count(&self, slot: FrameSlot) -> usize {
        self.pending.iter().filter(|(_, s)| *s == slot).count()
    }
}
