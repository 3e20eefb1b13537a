//! Profile card widget

use devfinder_core::{DisplayField, ProfileView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

/// Renders a found profile: name and join date, handle, bio, the three
/// counts and the four detail fields.
pub struct ProfileCard<'a> {
    view: &'a ProfileView,
    palette: &'a Palette,
}

impl<'a> ProfileCard<'a> {
    pub fn new(view: &'a ProfileView, palette: &'a Palette) -> Self {
        Self { view, palette }
    }

    fn field_style(&self, field: &DisplayField) -> Style {
        if !field.available {
            styles::text_muted(self.palette)
        } else if field.link.is_some() {
            styles::link(self.palette)
        } else {
            styles::text_primary(self.palette)
        }
    }

    fn detail_line(&self, label: &'static str, field: &'a DisplayField) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), styles::text_secondary(self.palette)),
            Span::styled(field.text.as_str(), self.field_style(field)),
        ])
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [name_row, handle_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let joined_width = self.view.joined.chars().count() as u16;
        let [name_area, joined_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(joined_width)])
                .areas(name_row);

        Paragraph::new(Span::styled(
            self.view.display_name.as_str(),
            styles::text_bold(p),
        ))
        .render(name_area, buf);
        Paragraph::new(Span::styled(
            self.view.joined.as_str(),
            styles::text_secondary(p),
        ))
        .alignment(Alignment::Right)
        .render(joined_area, buf);

        Paragraph::new(Span::styled(self.view.handle.as_str(), styles::accent(p)))
            .render(handle_row, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::inset_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        let stats = [
            ("Repos", &self.view.repos),
            ("Followers", &self.view.followers),
            ("Following", &self.view.following),
        ];
        for ((label, value), column) in stats.into_iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::styled(label, styles::text_secondary(p)),
                Line::styled(value.as_str(), styles::text_bold(p)),
            ])
            .alignment(Alignment::Center)
            .render(*column, buf);
        }
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [title, _, bio, stats, details] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_title(title, buf);

        let bio_style = if self.view.has_bio {
            styles::text_secondary(p)
        } else {
            styles::text_muted(p)
        };
        Paragraph::new(Span::styled(self.view.bio.as_str(), bio_style))
            .wrap(Wrap { trim: true })
            .render(bio, buf);

        self.render_stats(stats, buf);

        Paragraph::new(vec![
            self.detail_line("Location", &self.view.location),
            self.detail_line("Blog", &self.view.blog),
            self.detail_line("Twitter", &self.view.social),
            self.detail_line("Company", &self.view.company),
        ])
        .render(details, buf);
    }
}
