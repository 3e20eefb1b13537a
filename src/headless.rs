//! Headless mode - one lookup, NDJSON events on stdout
//!
//! Runs a single lookup through the same [`Engine`] the TUI uses and prints
//! one JSON object per line, so scripts can consume results without parsing
//! terminal output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"lookup_started","request_id":1,"username":"octocat","timestamp":1704700001000}
//! {"event":"lookup_succeeded","username":"octocat","profile":{...},"timestamp":1704700001450}
//! ```

use std::io::Write;

use chrono::Utc;
use devfinder_app::{Engine, EngineEvent};
use devfinder_core::prelude::*;
use devfinder_core::{LookupOutcome, ProfileView};
use devfinder_fetch::ProfileSource;
use serde::Serialize;
use tokio::sync::broadcast;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    LookupStarted {
        request_id: u64,
        username: String,
        timestamp: i64,
    },

    LookupSucceeded {
        username: String,
        profile: ProfileView,
        timestamp: i64,
    },

    LookupNotFound {
        username: String,
        message: String,
        timestamp: i64,
    },

    LookupFailed {
        username: String,
        message: String,
        timestamp: i64,
    },

    /// The run ended without a lookup result
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map a settled outcome to its event. Returns `None` for `Idle`/`Loading`.
    pub fn from_outcome(username: &str, outcome: &LookupOutcome) -> Option<Self> {
        let username = username.to_string();
        let timestamp = Self::now();
        let event = match outcome {
            LookupOutcome::Idle | LookupOutcome::Loading => return None,
            LookupOutcome::Success(record) => Self::LookupSucceeded {
                username,
                profile: ProfileView::from_record(record),
                timestamp,
            },
            LookupOutcome::NotFound => Self::LookupNotFound {
                username,
                message: outcome.error_message().unwrap_or_default().to_string(),
                timestamp,
            },
            LookupOutcome::TransientError(message) => Self::LookupFailed {
                username,
                message: message.clone(),
                timestamp,
            },
        };
        Some(event)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    /// Write this event as a single NDJSON line and flush
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }
}

/// Look up `username` and write events to `out`.
///
/// Returns `true` only when a profile was found.
pub async fn run_lookup<S, W>(engine: &mut Engine<S>, username: &str, out: &mut W) -> Result<bool>
where
    S: ProfileSource + Send + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();
    engine.submit(username);

    if engine.state.latest_request.is_none() {
        HeadlessEvent::error("username must not be blank").emit(out)?;
        return Ok(false);
    }

    loop {
        if let Some(found) = drain_events(&mut events, username.trim(), out)? {
            return Ok(found);
        }

        if engine.should_quit() {
            info!("Quit requested before the lookup finished");
            HeadlessEvent::error("interrupted").emit(out)?;
            return Ok(false);
        }

        match engine.next_message().await {
            Some(msg) => engine.process_message(msg),
            None => {
                warn!("Message channel closed");
                HeadlessEvent::error("message channel closed").emit(out)?;
                return Err(Error::ChannelClosed);
            }
        }
    }
}

/// Forward pending engine events. Returns `Some(found)` once the lookup settles.
fn drain_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    username: &str,
    out: &mut W,
) -> Result<Option<bool>> {
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless event receiver lagged by {}", skipped);
                continue;
            }
            Err(_) => return Ok(None),
        };

        match event {
            EngineEvent::LookupStarted {
                request_id,
                username,
            } => {
                HeadlessEvent::LookupStarted {
                    request_id,
                    username,
                    timestamp: HeadlessEvent::now(),
                }
                .emit(out)?;
            }
            EngineEvent::LookupResolved { outcome, .. } => {
                if let Some(event) = HeadlessEvent::from_outcome(username, &outcome) {
                    event.emit(out)?;
                    return Ok(Some(outcome.profile().is_some()));
                }
            }
            EngineEvent::ThemeChanged { .. } | EngineEvent::Shutdown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfinder_app::config::Settings;
    use devfinder_app::MemoryThemeStore;
    use devfinder_fetch::test_utils::StaticProfileSource;
    use serde_json::Value;

    fn engine(source: StaticProfileSource) -> Engine<StaticProfileSource> {
        Engine::new(
            Settings::default(),
            source,
            Box::new(MemoryThemeStore::new()),
        )
    }

    fn lines(out: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).expect("invalid JSON line"))
            .collect()
    }

    #[tokio::test]
    async fn test_found_profile_emits_started_and_succeeded() {
        let mut engine = engine(StaticProfileSource::new().with_profile("octocat"));
        let mut out = Vec::new();

        let found = run_lookup(&mut engine, "octocat", &mut out).await.unwrap();

        assert!(found);
        let events = lines(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "lookup_started");
        assert_eq!(events[0]["request_id"], 1);
        assert_eq!(events[1]["event"], "lookup_succeeded");
        assert_eq!(events[1]["username"], "octocat");
        assert_eq!(events[1]["profile"]["handle"], "@octocat");
        assert_eq!(events[1]["profile"]["joined"], "Joined 3 Aug 2011");
        assert!(events[1]["timestamp"].is_number());
    }

    #[tokio::test]
    async fn test_unknown_user_emits_not_found() {
        let mut engine = engine(StaticProfileSource::new());
        let mut out = Vec::new();

        let found = run_lookup(&mut engine, "doesnotexist123xyz", &mut out)
            .await
            .unwrap();

        assert!(!found);
        let events = lines(&out);
        assert_eq!(events[1]["event"], "lookup_not_found");
        assert_eq!(events[1]["message"], "No results");
    }

    #[tokio::test]
    async fn test_transient_failure_carries_message() {
        let source = StaticProfileSource::new().with(
            "octocat",
            LookupOutcome::transient("API rate limit exceeded"),
        );
        let mut engine = engine(source);
        let mut out = Vec::new();

        let found = run_lookup(&mut engine, "octocat", &mut out).await.unwrap();

        assert!(!found);
        let events = lines(&out);
        assert_eq!(events[1]["event"], "lookup_failed");
        assert_eq!(events[1]["message"], "API rate limit exceeded");
    }

    #[tokio::test]
    async fn test_blank_username_emits_error_without_lookup() {
        let mut engine = engine(StaticProfileSource::new());
        let mut out = Vec::new();

        let found = run_lookup(&mut engine, "  ", &mut out).await.unwrap();

        assert!(!found);
        assert_eq!(engine.source().call_count(), 0);
        let events = lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "error");
    }

    #[test]
    fn test_non_settled_outcome_has_no_event() {
        assert!(HeadlessEvent::from_outcome("octocat", &LookupOutcome::Loading).is_none());
        assert!(HeadlessEvent::from_outcome("octocat", &LookupOutcome::Idle).is_none());
    }
}
