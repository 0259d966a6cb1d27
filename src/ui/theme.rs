//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── document ───────────────────────────────────────────────
    pub fn heading_style(level: u8) -> Style {
        let colour = match level {
            1 => Color::Green,
            2 => Color::Cyan,
            3 => Color::Yellow,
            _ => Color::Magenta,
        };
        Style::default().fg(colour).add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn rail_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn rail_thumb_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn status_message_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::Yellow)
    }
}
