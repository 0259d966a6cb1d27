//! Input handling: maps key/mouse events to animator calls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::core::animator::ScrollOptions;
use crate::core::host::{ScrollHost, ScrollTarget};
use crate::core::timing::Clock;

use super::document::Anchor;
use super::state::AppState;

/// Key legend for the status bar.
pub const KEY_HINT: &str = "j/k: glide | spc/b: page | g/G: ends | n/N: heading | s: smooth | q: quit";

/// Process a key event.
pub fn handle_key<C: Clock>(state: &mut AppState<C>, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    state.status_message = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => wheel(state, 1.0),
        KeyCode::Char('k') | KeyCode::Up => wheel(state, -1.0),
        KeyCode::Char(' ') | KeyCode::PageDown => page(state, 1.0),
        KeyCode::Char('b') | KeyCode::PageUp => page(state, -1.0),
        KeyCode::Char('g') | KeyCode::Home => {
            state.animator.scroll_to(0.0, ScrollOptions::default());
        }
        KeyCode::Char('G') | KeyCode::End => {
            let bottom = state.host().max_scroll();
            state.animator.scroll_to(bottom, ScrollOptions::default());
        }
        KeyCode::Char('n') => jump_heading(state, true),
        KeyCode::Char('N') | KeyCode::Char('p') => jump_heading(state, false),
        KeyCode::Char('s') => toggle_smoothing(state),
        _ => {}
    }
}

/// Process a mouse event.  Only the wheel is used.
pub fn handle_mouse<C: Clock>(state: &mut AppState<C>, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => wheel(state, 1.0),
        MouseEventKind::ScrollUp => wheel(state, -1.0),
        _ => {}
    }
}

/// Pane height changed.
pub fn handle_resize<C: Clock>(state: &mut AppState<C>, pane_rows: u16) {
    state.animator.host_mut().set_viewport_rows(pane_rows);
}

/// Scroll to `selector`, reporting a miss in the status bar.
pub fn goto_selector<C: Clock>(state: &mut AppState<C>, selector: &str) {
    if state.host().query_selector(selector).is_none() {
        debug!(selector, "no element matches");
        state.status_message = Some(format!("No match for {selector}"));
    }
    // Unresolved selectors are ignored by the animator itself.
    state.animator.scroll_to(selector, ScrollOptions::default());
}

/// One wheel notch.  Falls back to an instant jump when smoothing is off.
fn wheel<C: Clock>(state: &mut AppState<C>, direction: f64) {
    let delta = direction * state.animator.config().wheel_step;
    if !state.animator.handle_wheel(delta) {
        state
            .animator
            .scroll_by(delta, ScrollOptions::default().duration(0.0));
    }
}

fn page<C: Clock>(state: &mut AppState<C>, direction: f64) {
    // Keep two rows of context across the jump.
    let rows = (state.host().viewport_height() - 2.0).max(1.0);
    state.animator.scroll_by(direction * rows, ScrollOptions::default());
}

fn jump_heading<C: Clock>(state: &mut AppState<C>, forward: bool) {
    // Navigate relative to where the view is heading, so repeated presses
    // walk through sections even mid-animation.
    let from = state
        .animator
        .eased_target()
        .unwrap_or_else(|| state.host().scroll_offset())
        .round()
        .max(0.0) as usize;
    let doc = state.document();
    let index = if forward {
        doc.next_heading(from)
    } else {
        doc.prev_heading(from)
    };
    let found = index.map(|i| (i, doc.headings()[i].title.clone()));

    match found {
        Some((i, title)) => {
            state.status_message = Some(title);
            state
                .animator
                .scroll_to(ScrollTarget::Element(Anchor::Heading(i)), ScrollOptions::default());
        }
        None => {
            state.status_message = Some(if forward {
                "Last heading".into()
            } else {
                "First heading".into()
            });
        }
    }
}

fn toggle_smoothing<C: Clock>(state: &mut AppState<C>) {
    if state.animator.is_smooth_enabled() {
        state.animator.destroy();
        state.status_message = Some("Wheel smoothing off".into());
    } else {
        state.animator.enable_smooth_scroll();
        state.status_message = Some("Wheel smoothing on".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::document::Document;
    use crate::config::AppConfig;
    use crate::core::animator::Driver;
    use crate::core::timing::ManualClock;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn scroll(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn state() -> (AppState<ManualClock>, ManualClock) {
        let mut text = String::new();
        for section in 0..8 {
            text.push_str(&format!("## Part {section}\n"));
            for line in 0..24 {
                text.push_str(&format!("{section}:{line}\n"));
            }
        }
        let clock = ManualClock::new();
        let mut config = AppConfig::default();
        config.scroll.duration_secs = 0.3;
        let state = AppState::with_clock(Document::parse("t", &text), 30, config, clock.clone());
        (state, clock)
    }

    fn settle(state: &mut AppState<ManualClock>, clock: &ManualClock) {
        for _ in 0..500 {
            if !state.animator.wants_frame() {
                return;
            }
            clock.advance(16.0);
            state.animator.on_frame();
        }
        panic!("animation never settled");
    }

    #[test]
    fn mouse_wheel_glides() {
        let (mut s, clock) = state();
        handle_mouse(&mut s, scroll(MouseEventKind::ScrollDown));
        handle_mouse(&mut s, scroll(MouseEventKind::ScrollDown));
        assert_eq!(s.animator.wheel_target(), Some(6.0));
        assert_eq!(s.animator.active_driver(), Some(Driver::Wheel));
        settle(&mut s, &clock);
        assert!((s.host().scroll_offset() - 6.0).abs() <= 0.5);
    }

    #[test]
    fn wheel_without_smoothing_jumps() {
        let (mut s, clock) = state();
        handle_key(&mut s, key(KeyCode::Char('s')));
        assert!(!s.animator.is_smooth_enabled());
        handle_key(&mut s, key(KeyCode::Char('j')));
        clock.advance(16.0);
        s.animator.on_frame();
        assert_eq!(s.host().scroll_offset(), 3.0);
    }

    #[test]
    fn end_and_home_ease_to_the_ends() {
        let (mut s, clock) = state();
        handle_key(&mut s, key(KeyCode::End));
        assert_eq!(s.animator.active_driver(), Some(Driver::Eased));
        settle(&mut s, &clock);
        assert_eq!(s.host().scroll_offset(), s.host().max_scroll());

        handle_key(&mut s, key(KeyCode::Char('g')));
        settle(&mut s, &clock);
        assert_eq!(s.host().scroll_offset(), 0.0);
    }

    #[test]
    fn next_heading_walks_sections_mid_flight() {
        let (mut s, clock) = state();
        handle_key(&mut s, key(KeyCode::Char('n')));
        handle_key(&mut s, key(KeyCode::Char('n')));
        assert_eq!(s.animator.eased_target(), Some(50.0));
        settle(&mut s, &clock);
        assert_eq!(s.host().top_line(), 50);

        handle_key(&mut s, key(KeyCode::Char('N')));
        settle(&mut s, &clock);
        assert_eq!(s.host().top_line(), 25);
    }

    #[test]
    fn goto_missing_selector_reports_and_stays_put() {
        let (mut s, clock) = state();
        goto_selector(&mut s, "#missing-element");
        assert!(s.status_message.as_deref().unwrap_or("").contains("#missing-element"));
        assert!(!s.animator.wants_frame());
        clock.advance(1000.0);
        s.animator.on_frame();
        assert_eq!(s.host().scroll_offset(), 0.0);
    }

    #[test]
    fn goto_selector_scrolls_to_heading() {
        let (mut s, clock) = state();
        goto_selector(&mut s, "#part-2");
        settle(&mut s, &clock);
        assert_eq!(s.host().top_line(), 50);
        assert_eq!(s.status_message, None);
    }

    #[test]
    fn page_keeps_two_rows_of_context() {
        let (mut s, clock) = state();
        handle_key(&mut s, key(KeyCode::PageDown));
        settle(&mut s, &clock);
        assert_eq!(s.host().scroll_offset(), 28.0);
    }

    #[test]
    fn toggle_reports_capture_changes() {
        let (mut s, _clock) = state();
        assert_eq!(s.animator.host_mut().take_capture_change(), Some(true));
        handle_key(&mut s, key(KeyCode::Char('s')));
        assert_eq!(s.animator.host_mut().take_capture_change(), Some(false));
    }

    #[test]
    fn quit_keys() {
        let (mut s, _clock) = state();
        handle_key(&mut s, key(KeyCode::Char('q')));
        assert!(s.should_quit);

        let (mut s, _clock) = state();
        handle_key(
            &mut s,
            KeyEvent {
                modifiers: KeyModifiers::CONTROL,
                ..key(KeyCode::Char('c'))
            },
        );
        assert!(s.should_quit);
    }
}
