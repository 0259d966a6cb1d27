//! The document being scrolled, seen from the animator.
//!
//! The animator never owns a document.  It reads and writes one through
//! [`ScrollHost`], which a browser window, a terminal pager or a test double
//! can implement.  All positions are in the host's own units (CSS pixels,
//! terminal rows, ...).

/// Read/write access to a scrollable document.
pub trait ScrollHost {
    /// Handle to an element inside the document.
    type Element;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Immediate, non-animated write of the vertical scroll offset.
    fn set_scroll_offset(&mut self, offset: f64);

    /// First element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Top of `element` relative to the document.  `None` when the element is
    /// no longer part of the document.
    fn element_top(&self, element: &Self::Element) -> Option<f64>;

    /// Full height of the document.
    fn document_height(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Attach or detach the wheel listener.  Hosts that always deliver wheel
    /// input can leave this as a no-op.
    fn set_wheel_capture(&mut self, _enabled: bool) {}

    /// Largest offset the document can be scrolled to.  Never negative.
    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height()).max(0.0)
    }
}

/// Where a `scroll_to` call should go.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget<E> {
    /// Absolute offset.  Used as-is; the additive offset is not applied.
    Offset(f64),
    /// Selector resolved against the document at call time.
    Selector(String),
    /// Element already held by the caller.
    Element(E),
}

impl<E> From<f64> for ScrollTarget<E> {
    fn from(offset: f64) -> Self {
        ScrollTarget::Offset(offset)
    }
}

impl<E> From<&str> for ScrollTarget<E> {
    fn from(selector: &str) -> Self {
        ScrollTarget::Selector(selector.to_string())
    }
}

impl<E> From<String> for ScrollTarget<E> {
    fn from(selector: String) -> Self {
        ScrollTarget::Selector(selector)
    }
}

/// Resolve `target` to an absolute offset.
///
/// Selector and element targets get `additive` added to the element's top.
/// Returns `None` when a selector matches nothing or an element has left the
/// document; callers treat that as "do nothing".
pub fn resolve_target<H: ScrollHost>(
    host: &H,
    target: &ScrollTarget<H::Element>,
    additive: f64,
) -> Option<f64> {
    match target {
        ScrollTarget::Offset(offset) => Some(*offset),
        ScrollTarget::Selector(selector) => {
            let element = host.query_selector(selector)?;
            host.element_top(&element).map(|top| top + additive)
        }
        ScrollTarget::Element(element) => host.element_top(element).map(|top| top + additive),
    }
}
