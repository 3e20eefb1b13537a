//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the profile source
//! and the theme store, and broadcasts [`EngineEvent`]s derived from state
//! changes.

use std::sync::Arc;

use devfinder_core::{LookupOutcome, ThemePreference};
use devfinder_fetch::ProfileSource;
use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, RequestId};
use crate::theme_store::ThemeStore;

/// Capacity of the message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    latest_request: Option<RequestId>,
    outcome: LookupOutcome,
    theme: ThemePreference,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            latest_request: state.latest_request,
            outcome: state.outcome.clone(),
            theme: state.theme,
        }
    }
}

/// Orchestration engine for devfinder.
///
/// Generic over the [`ProfileSource`] so runners use the GitHub client and
/// tests use a scripted source.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, lookups).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings (after CLI overrides)
    pub settings: Settings,

    source: Arc<S>,

    theme_store: Box<dyn ThemeStore>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: ProfileSource + Send + Sync + 'static,
{
    /// Create an Engine.
    ///
    /// Reads the stored theme once, creates the message channel and spawns
    /// the signal handler. Must be called inside a tokio runtime.
    pub fn new(settings: Settings, source: S, theme_store: Box<dyn ThemeStore>) -> Self {
        let theme = theme_store.load();
        debug!("Starting with theme '{}'", theme);

        let state = AppState::with_settings(settings.clone(), theme);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            source: Arc::new(source),
            theme_store,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped and the
    /// receiver reports `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.source,
            self.theme_store.as_ref(),
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from background tasks.
    ///
    /// Never returns `None` while the engine is alive, since it holds a sender.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Replace the query with `username` and submit it.
    pub fn submit(&mut self, username: &str) {
        self.process_message(Message::QueryInput {
            text: username.to_string(),
        });
        self.process_message(Message::SubmitQuery);
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.latest_request != pre.latest_request {
            if let (Some(request_id), Some(username)) =
                (post.latest_request, self.state.last_submitted.clone())
            {
                self.emit(EngineEvent::LookupStarted {
                    request_id,
                    username,
                });
            }
        }

        if post.outcome != pre.outcome && post.outcome.is_settled() {
            self.emit(EngineEvent::LookupResolved {
                request_id: post.latest_request,
                outcome: post.outcome.clone(),
            });
        }

        if post.theme != pre.theme {
            self.emit(EngineEvent::ThemeChanged { theme: post.theme });
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
