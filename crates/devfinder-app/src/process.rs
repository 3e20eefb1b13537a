//! Message processing
//!
//! Runs a message through the TEA update loop and dispatches the resulting
//! actions.

use std::sync::Arc;

use devfinder_fetch::ProfileSource;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::theme_store::ThemeStore;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    theme_store: &dyn ThemeStore,
) where
    S: ProfileSource + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            let browser = state.settings.ui.browser.clone();
            handle_action(action, msg_tx.clone(), source, theme_store, &browser);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
