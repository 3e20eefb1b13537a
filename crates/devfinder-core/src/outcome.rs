//! Lookup outcome - the state of the profile-lookup view

use crate::profile::ProfileRecord;

/// Fallback message for failed lookups when the data source gives none.
pub const NO_RESULTS: &str = "No results";

/// Where the current lookup stands. Exactly one variant is active at a time.
///
/// ```text
/// Idle ──submit──▶ Loading ──resolve──▶ Success | NotFound | TransientError
///                     ▲                              │
///                     └────────────submit────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupOutcome {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A lookup is in flight
    Loading,
    /// The account was found
    Success(ProfileRecord),
    /// The data source reported that the account does not exist
    NotFound,
    /// Network, parse, rate-limit or server failure
    TransientError(String),
}

impl LookupOutcome {
    pub fn transient(message: impl Into<String>) -> Self {
        Self::TransientError(message.into())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once a lookup has resolved, whatever the result
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            Self::Success(_) | Self::NotFound | Self::TransientError(_)
        )
    }

    /// The profile, only in the `Success` state
    pub fn profile(&self) -> Option<&ProfileRecord> {
        match self {
            Self::Success(record) => Some(record),
            _ => None,
        }
    }

    /// Inline message for failed lookups.
    ///
    /// `NotFound` and `TransientError` render the same way; only the text
    /// can differ.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::NotFound => Some(NO_RESULTS),
            Self::TransientError(message) => Some(message),
            _ => None,
        }
    }

    /// Stable snake_case name, used in logs and headless output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::NotFound => "not_found",
            Self::TransientError(_) => "transient_error",
        }
    }
}
