//! Abstract input key event, independent of terminal library.
//!
//! Keeps devfinder-app free of crossterm types so the headless runner can
//! drive the same engine.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+t, Ctrl+c, etc.)
    CharCtrl(char),

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Backspace key
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('t'), InputKey::CharCtrl('t'));
        assert_ne!(InputKey::CharCtrl('t'), InputKey::Char('t'));
    }
}
