//! In-memory [`ScrollHost`] used by the unit tests.

use std::collections::HashMap;

use super::host::ScrollHost;

/// Document of fixed height with named elements at fixed tops.  Every write
/// to the scroll offset is recorded.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
    pub elements: HashMap<String, f64>,
    pub writes: Vec<f64>,
    pub wheel_captured: bool,
}

impl FakeHost {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            document_height,
            viewport_height,
            elements: HashMap::new(),
            writes: Vec::new(),
            wheel_captured: false,
        }
    }

    pub fn with_element(mut self, selector: &str, top: f64) -> Self {
        self.elements.insert(selector.to_string(), top);
        self
    }

    pub fn remove_element(&mut self, selector: &str) {
        self.elements.remove(selector);
    }
}

impl ScrollHost for FakeHost {
    /// Elements are addressed by their selector string.
    type Element = String;

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.writes.push(offset);
    }

    fn query_selector(&self, selector: &str) -> Option<String> {
        self.elements
            .contains_key(selector)
            .then(|| selector.to_string())
    }

    fn element_top(&self, element: &String) -> Option<f64> {
        self.elements.get(element).copied()
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_wheel_capture(&mut self, enabled: bool) {
        self.wheel_captured = enabled;
    }
}
