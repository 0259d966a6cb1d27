//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::config::AppConfig;
use crate::core::animator::{Driver, ScrollAnimator};
use crate::core::host::ScrollHost;
use crate::core::timing::{Clock, MonotonicClock};

use super::document::Document;
use super::host::TerminalHost;

/// Top-level application state.
pub struct AppState<C: Clock = MonotonicClock> {
    /// Animator driving the pager's scroll offset.  Owns the document.
    pub animator: ScrollAnimator<TerminalHost, C>,
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(document: Document, viewport_rows: u16, config: AppConfig) -> Self {
        Self::with_clock(document, viewport_rows, config, MonotonicClock::new())
    }
}

impl<C: Clock> AppState<C> {
    pub fn with_clock(document: Document, viewport_rows: u16, config: AppConfig, clock: C) -> Self {
        let host = TerminalHost::new(document, viewport_rows);
        Self {
            animator: ScrollAnimator::with_clock(host, config.scroll, clock),
            config,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn host(&self) -> &TerminalHost {
        self.animator.host()
    }

    pub fn document(&self) -> &Document {
        self.animator.host().document()
    }

    /// One-line summary for the status bar: position, driver and section.
    pub fn position_summary(&self) -> String {
        let host = self.host();
        let driver = match self.animator.active_driver() {
            Some(Driver::Eased) => "easing",
            Some(Driver::Wheel) => "gliding",
            None if self.animator.is_smooth_enabled() => "smooth",
            None => "direct",
        };
        let section = self
            .document()
            .heading_at(host.top_line())
            .map(|h| format!("  § {}", h.title))
            .unwrap_or_default();
        format!(
            " {:>6.1}/{:.0}  {driver}{section}",
            host.scroll_offset(),
            host.max_scroll()
        )
    }
}
