//! App title and theme toggle label

use devfinder_core::ThemePreference;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub const APP_TITLE: &str = "devfinder";

/// `devfinder` on the left, the toggle label on the right.
///
/// The label names the theme a toggle switches to: `LIGHT` while dark,
/// `DARK` while light.
pub struct Header<'a> {
    theme: ThemePreference,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(theme: ThemePreference, palette: &'a Palette) -> Self {
        Self { theme, palette }
    }

    fn icon(&self) -> &'static str {
        match self.theme {
            ThemePreference::Dark => "☀",
            ThemePreference::Light => "☾",
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;

        let toggle = Line::from(vec![
            Span::styled(self.theme.toggle_label(), styles::text_secondary(p)),
            Span::raw(" "),
            Span::styled(self.icon(), styles::text_secondary(p)),
            Span::styled("  ^T", styles::text_muted(p)),
        ]);
        let [title_area, toggle_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(toggle.width() as u16),
        ])
        .areas(area);

        Paragraph::new(Span::styled(APP_TITLE, styles::text_bold(p))).render(title_area, buf);
        Paragraph::new(toggle)
            .alignment(Alignment::Right)
            .render(toggle_area, buf);
    }
}
