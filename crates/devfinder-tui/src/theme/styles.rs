//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::Palette;

// --- Surfaces ---
pub fn background(p: &Palette) -> Style {
    Style::default().bg(p.background).fg(p.text_primary)
}

pub fn card(p: &Palette) -> Style {
    Style::default().bg(p.card).fg(p.text_primary)
}

pub fn inset(p: &Palette) -> Style {
    Style::default().bg(p.inset).fg(p.text_primary)
}

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_bold(p: &Palette) -> Style {
    text_primary(p).add_modifier(Modifier::BOLD)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn link(p: &Palette) -> Style {
    Style::default()
        .fg(p.link)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.error)
}

/// Solid accent label, e.g. the Search button
pub fn button(p: &Palette) -> Style {
    Style::default()
        .fg(p.on_accent)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn card_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border))
        .style(card(p))
        .padding(Padding::horizontal(1))
}

pub fn inset_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { p.accent } else { p.border }))
        .style(inset(p))
}
