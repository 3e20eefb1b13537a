//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

const HINTS: &[(&str, &str)] = &[
    ("Enter", "search"),
    ("^T", "theme"),
    ("^U", "clear"),
    ("^O", "profile"),
    ("^B", "blog"),
    ("Esc", "quit"),
];

pub struct KeyHints<'a> {
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted(p)));
            }
            spans.push(Span::styled(*key, styles::accent(p)));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted(p)));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
