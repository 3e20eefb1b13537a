//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;

/// Convert a key event to a message.
///
/// The search box always has focus, so plain characters edit the query and
/// commands live on Ctrl chords.
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitQuery),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('t') => Some(Message::ToggleTheme),
        InputKey::CharCtrl('u') => Some(Message::ClearQuery),
        InputKey::CharCtrl('o') => Some(Message::OpenProfile),
        InputKey::CharCtrl('b') => Some(Message::OpenBlog),
        InputKey::Char(c) if !c.is_control() => Some(Message::InputChar(c)),
        _ => None,
    }
}
