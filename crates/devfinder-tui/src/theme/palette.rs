//! Colour palettes, one per theme.

use devfinder_core::ThemePreference;
use ratatui::style::Color;

/// Every colour the UI paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Terminal background
    pub background: Color,
    /// Main card background
    pub card: Color,
    /// Search bar and profile panel background
    pub inset: Color,
    pub border: Color,
    pub accent: Color,
    /// Text on accent-coloured surfaces
    pub on_accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Placeholders and unavailable fields
    pub text_muted: Color,
    pub link: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(20, 29, 47),
    card: Color::Rgb(30, 42, 71),
    inset: Color::Rgb(20, 29, 47),
    border: Color::Rgb(60, 76, 112),
    accent: Color::Rgb(0, 121, 255),
    on_accent: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(255, 255, 255),
    text_secondary: Color::Rgb(156, 163, 175),
    text_muted: Color::Rgb(107, 114, 128),
    link: Color::Rgb(96, 165, 250),
    error: Color::Rgb(239, 68, 68),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(243, 244, 246),
    card: Color::Rgb(255, 255, 255),
    inset: Color::Rgb(249, 250, 251),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(59, 130, 246),
    on_accent: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(31, 41, 55),
    text_secondary: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(156, 163, 175),
    link: Color::Rgb(59, 130, 246),
    error: Color::Rgb(239, 68, 68),
};

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> &'static Palette {
        match theme {
            ThemePreference::Light => &LIGHT,
            ThemePreference::Dark => &DARK,
        }
    }
}
