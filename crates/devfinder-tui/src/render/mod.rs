//! Main render/view function (View in TEA pattern)


use devfinder_app::state::AppState;
use devfinder_core::{LookupOutcome, ProfileView};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{styles, Palette};
use crate::widgets;

pub const LOADING_TEXT: &str = "Loading...";
pub const IDLE_TEXT: &str = "Search for a GitHub username to see their profile";

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(styles::background(palette)), area);

    let areas = layout::create(area, state.settings.ui.show_hints);

    frame.render_widget(styles::card_block(palette), areas.card);
    frame.render_widget(widgets::Header::new(state.theme, palette), areas.header);
    frame.render_widget(widgets::SearchInput::new(&state.query, palette), areas.search);

    render_message(frame, areas.message, state, palette);
    render_result(frame, areas.result, state, palette);

    if state.settings.ui.show_hints {
        frame.render_widget(widgets::KeyHints::new(palette), areas.footer);
    }
}

/// Inline lookup error under the search box, else any status notice
fn render_message(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = if let Some(message) = state.outcome.error_message() {
        Line::from(Span::styled(message, styles::error(palette)))
    } else if let Some(notice) = &state.notice {
        Line::from(Span::styled(notice.as_str(), styles::text_secondary(palette)))
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_result(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    match &state.outcome {
        LookupOutcome::Idle => {
            let hint = Paragraph::new(Span::styled(IDLE_TEXT, styles::text_muted(palette)))
                .alignment(Alignment::Center);
            frame.render_widget(hint, padded(area));
        }
        LookupOutcome::Loading => {
            let frame_idx = state.loading_frame % SPINNER.len();
            let loading = Paragraph::new(Line::from(vec![
                Span::styled(SPINNER[frame_idx], styles::accent(palette)),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, styles::text_secondary(palette)),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(loading, padded(area));
        }
        LookupOutcome::Success(record) => {
            let view = ProfileView::from_record(record);
            let panel = styles::inset_block(palette, false);
            let inner = panel.inner(area);
            frame.render_widget(panel, area);
            frame.render_widget(widgets::ProfileCard::new(&view, palette), inset(inner));
        }
        // The message line carries the error; a failed lookup shows no profile.
        LookupOutcome::NotFound | LookupOutcome::TransientError(_) => {}
    }
}

/// Drop the first row so status text is not glued to the search box
fn padded(area: Rect) -> Rect {
    Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// One column of horizontal padding inside a panel
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}
