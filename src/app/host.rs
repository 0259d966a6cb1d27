//! [`ScrollHost`] over a [`Document`] shown in a terminal pane.
//!
//! Units are terminal rows: one document line is one row tall.  The offset is
//! kept fractional so slow animations still move smoothly in the model, and is
//! rounded only when rendering.

use crate::core::host::ScrollHost;

use super::document::{Anchor, Document};

pub struct TerminalHost {
    document: Document,
    offset: f64,
    viewport_rows: u16,
    wheel_capture: bool,
    /// Capture change not yet applied to the terminal.
    capture_change: Option<bool>,
}

impl TerminalHost {
    pub fn new(document: Document, viewport_rows: u16) -> Self {
        Self {
            document,
            offset: 0.0,
            viewport_rows,
            wheel_capture: false,
            capture_change: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Report a new pane height.  The offset is pulled back into range.
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.offset = self.offset.clamp(0.0, self.max_scroll());
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Index of the first document line on screen.
    pub fn top_line(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    pub fn wheel_capture(&self) -> bool {
        self.wheel_capture
    }

    /// Mouse-capture change the event loop still has to send to the terminal.
    pub fn take_capture_change(&mut self) -> Option<bool> {
        self.capture_change.take()
    }
}

impl ScrollHost for TerminalHost {
    type Element = Anchor;

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    /// Writes outside the scrollable range are clamped, as a browser would.
    fn set_scroll_offset(&mut self, offset: f64) {
        if offset.is_finite() {
            self.offset = offset.clamp(0.0, self.max_scroll());
        }
    }

    fn query_selector(&self, selector: &str) -> Option<Anchor> {
        self.document.query(selector)
    }

    fn element_top(&self, element: &Anchor) -> Option<f64> {
        self.document.anchor_line(*element).map(|line| line as f64)
    }

    fn document_height(&self) -> f64 {
        self.document.len() as f64
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.viewport_rows)
    }

    fn set_wheel_capture(&mut self, enabled: bool) {
        if self.wheel_capture != enabled {
            self.wheel_capture = enabled;
            self.capture_change = Some(enabled);
        }
    }
}
