//! Light and dark themes for the TUI.
//!
//! This module provides:
//! - `palette` - Colour sets for each `ThemePreference`
//! - `styles` - Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
