//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use devfinder_core::NOT_AVAILABLE;
use tracing::warn;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::QueryInput { text } => {
            state.query = text;
            state.notice = None;
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            state.query.push(c);
            state.notice = None;
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.query.pop();
            UpdateResult::none()
        }

        Message::ClearQuery => {
            state.query.clear();
            state.notice = None;
            UpdateResult::none()
        }

        Message::SubmitQuery => {
            let query = state.query.clone();
            match state.submit_query(&query) {
                Some((request_id, username)) => UpdateResult::action(UpdateAction::Lookup {
                    request_id,
                    username,
                }),
                None => UpdateResult::none(),
            }
        }

        Message::LookupResolved {
            request_id,
            outcome,
        } => {
            state.apply_resolution(request_id, outcome);
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            let theme = state.toggle_theme();
            UpdateResult::action(UpdateAction::PersistTheme { theme })
        }

        Message::OpenProfile => match state.profile_link() {
            Some(url) => UpdateResult::action(UpdateAction::OpenUrl { url }),
            None => {
                if state.profile().is_some() {
                    state.notice = Some(format!("Profile page: {}", NOT_AVAILABLE));
                }
                UpdateResult::none()
            }
        },

        Message::OpenBlog => match state.blog_link() {
            Some(url) => UpdateResult::action(UpdateAction::OpenUrl { url }),
            None => {
                if state.profile().is_some() {
                    state.notice = Some(format!("Blog: {}", NOT_AVAILABLE));
                }
                UpdateResult::none()
            }
        },

        Message::BrowserOpenFailed { url, error } => {
            warn!("Failed to open {}: {}", url, error);
            state.notice = Some(format!("Could not open {}", url));
            UpdateResult::none()
        }
    }
}
