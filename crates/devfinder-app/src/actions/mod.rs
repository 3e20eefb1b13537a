//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use devfinder_core::prelude::*;
use devfinder_fetch::ProfileSource;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::RequestId;
use crate::theme_store::ThemeStore;

pub(crate) mod browser;

pub use browser::open_url_in_browser;

/// Execute an action, spawning a background task where it needs one
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
    theme_store: &dyn ThemeStore,
    browser: &str,
) where
    S: ProfileSource + Send + Sync + 'static,
{
    match action {
        UpdateAction::Lookup {
            request_id,
            username,
        } => {
            spawn_lookup(request_id, username, Arc::clone(source), msg_tx);
        }

        UpdateAction::PersistTheme { theme } => {
            theme_store.save(theme);
        }

        UpdateAction::OpenUrl { url } => {
            if let Err(e) = open_url_in_browser(&url, browser) {
                warn!("Failed to open {} in browser: {}", url, e);
                let _ = msg_tx.try_send(Message::BrowserOpenFailed {
                    url,
                    error: e.to_string(),
                });
            }
        }
    }
}

/// Run one lookup on the runtime and post the result back as
/// `Message::LookupResolved`.
///
/// Lookups are never cancelled; a result that arrives after a newer submit is
/// filtered by the state, not here.
pub fn spawn_lookup<S>(
    request_id: RequestId,
    username: String,
    source: Arc<S>,
    msg_tx: mpsc::Sender<Message>,
) where
    S: ProfileSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = source.lookup(&username).await;
        debug!(
            "Lookup #{} for '{}' finished: {}",
            request_id,
            username,
            outcome.label()
        );

        if let Err(e) = msg_tx
            .send(Message::LookupResolved {
                request_id,
                outcome,
            })
            .await
        {
            let err = Error::channel_send(e.to_string());
            debug!("Dropping lookup #{}: {}", request_id, err);
        }
    });
}
