//! Ratatui widget that renders the visible slice of a [`Document`].
//!
//! Headings are styled by level and a one-column rail on the right edge shows
//! where the viewport sits in the document.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::document::Document;

use super::theme::Theme;

/// The pager widget: created fresh each frame.
pub struct PagerView<'a> {
    document: &'a Document,
    top_line: usize,
    block: Option<Block<'a>>,
}

impl<'a> PagerView<'a> {
    pub fn new(document: &'a Document, top_line: usize) -> Self {
        Self {
            document,
            top_line,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Rows `[start, end)` of a `height`-row rail that represent the viewport.
pub fn rail_thumb(top_line: usize, viewport: usize, total: usize, height: usize) -> (usize, usize) {
    if height == 0 || total <= viewport {
        return (0, height);
    }
    let len = ((viewport * height) / total).clamp(1, height);
    let max_top = total - viewport;
    let start = (top_line.min(max_top) * (height - len)) / max_top;
    (start, start + len)
}

impl Widget for PagerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let height = inner.height as usize;
        let text_width = inner.width - 1;
        let headings = self.document.headings();

        for (i, text) in self
            .document
            .lines()
            .iter()
            .enumerate()
            .skip(self.top_line)
            .take(height)
        {
            let y = inner.y + (i - self.top_line) as u16;
            let style = match headings.binary_search_by_key(&i, |h| h.line) {
                Ok(h) => Theme::heading_style(headings[h].level),
                Err(_) => Theme::body_style(),
            };
            let line = Line::from(Span::styled(text.as_str(), style));
            buf.set_line(inner.x, y, &line, text_width);
        }

        let rail_x = inner.x + text_width;
        let (start, end) = rail_thumb(self.top_line, height, self.document.len(), height);
        for row in 0..height {
            let (symbol, style) = if (start..end).contains(&row) {
                ("┃", Theme::rail_thumb_style())
            } else {
                ("│", Theme::rail_style())
            };
            buf.set_string(rail_x, inner.y + row as u16, symbol, style);
        }
    }
}
