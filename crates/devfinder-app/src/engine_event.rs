//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use devfinder_core::{LookupOutcome, ThemePreference};

use crate::state::RequestId;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A lookup was submitted and the outcome is now `Loading`
    LookupStarted {
        request_id: RequestId,
        username: String,
    },

    /// The displayed outcome changed to a resolved value
    LookupResolved {
        request_id: Option<RequestId>,
        outcome: LookupOutcome,
    },

    /// The theme was toggled
    ThemeChanged { theme: ThemePreference },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Stable snake_case name for the event
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LookupStarted { .. } => "lookup_started",
            Self::LookupResolved { .. } => "lookup_resolved",
            Self::ThemeChanged { .. } => "theme_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
