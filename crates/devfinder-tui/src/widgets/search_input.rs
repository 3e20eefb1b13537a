//! Search box widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub const PLACEHOLDER: &str = "Search GitHub username…";
const BUTTON: &str = " Search ";

/// Bordered search box: prompt, query (or placeholder), cursor and a
/// Search button.
pub struct SearchInput<'a> {
    query: &'a str,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, palette: &'a Palette) -> Self {
        Self { query, palette }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::inset_block(p, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [input_area, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(BUTTON.len() as u16),
        ])
        .areas(inner);

        let mut spans = vec![Span::styled(" ⌕ ", styles::accent(p))];
        if self.query.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted(p)));
        } else {
            spans.push(Span::styled(self.query, styles::text_primary(p)));
            spans.push(Span::styled("_", styles::accent(p)));
        }
        Paragraph::new(Line::from(spans)).render(input_area, buf);

        Paragraph::new(Span::styled(BUTTON, styles::button(p))).render(button_area, buf);
    }
}
