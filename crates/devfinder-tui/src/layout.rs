//! Screen layout definitions for the TUI
//!
//! A centred card holds the header, search bar, message line and result
//! area. The key hint footer sits under the card.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the card grows on large terminals
pub const MAX_CARD_WIDTH: u16 = 76;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Outer card, including its border
    pub card: Rect,
    /// App name and theme toggle
    pub header: Rect,
    /// Search box (bordered, 3 rows)
    pub search: Rect,
    /// Inline error or notice
    pub message: Rect,
    /// Loading text or profile
    pub result: Rect,
    /// Key hints, empty when hidden
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_hints: bool) -> ScreenAreas {
    let footer_height = u16::from(show_hints);
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);

    let card_width = body.width.min(MAX_CARD_WIDTH);
    let card = Rect {
        x: body.x + (body.width - card_width) / 2,
        width: card_width,
        ..body
    };

    // Border (1) plus one column of padding each side
    let inner = Rect {
        x: card.x.saturating_add(2),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(4),
        height: card.height.saturating_sub(2),
    };

    let [header, _, search, message, result] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    ScreenAreas {
        card,
        header,
        search,
        message,
        result,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let areas = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(areas.card.width, MAX_CARD_WIDTH);
        assert_eq!(areas.card.x, 2);
        assert_eq!(areas.card.height, 23);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.footer.y, 23);
        assert_eq!(areas.header.height, 1);
        assert_eq!(areas.search.height, 3);
        assert!(areas.result.height > 10);
    }

    #[test]
    fn test_layout_without_hints() {
        let areas = create(Rect::new(0, 0, 80, 24), false);
        assert_eq!(areas.footer.height, 0);
        assert_eq!(areas.card.height, 24);
    }

    #[test]
    fn test_layout_narrow_terminal_uses_full_width() {
        let areas = create(Rect::new(0, 0, 40, 12), true);
        assert_eq!(areas.card.x, 0);
        assert_eq!(areas.card.width, 40);
        assert_eq!(areas.search.width, 36);
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_panic() {
        let areas = create(Rect::new(0, 0, 3, 2), true);
        assert!(areas.result.height <= 2);
    }
}
