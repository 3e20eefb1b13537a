//! Application state (Model in TEA pattern)

use devfinder_core::prelude::*;
use devfinder_core::{normalize_blog_url, LookupOutcome, ProfileRecord, ThemePreference};

use crate::config::{LookupSequencing, Settings};

/// Monotonic identifier issued per submitted query
pub type RequestId = u64;

/// Application run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Text in the search box
    pub query: String,

    /// Single source of truth for what the result area shows
    pub outcome: LookupOutcome,

    pub theme: ThemePreference,

    pub sequencing: LookupSequencing,

    /// Id of the most recently submitted lookup
    pub latest_request: Option<RequestId>,

    next_request: RequestId,

    /// Username of the most recently submitted lookup
    pub last_submitted: Option<String>,

    /// Transient status line (browser failures, missing links)
    pub notice: Option<String>,

    /// Advances on every tick while loading
    pub loading_frame: usize,

    pub phase: AppPhase,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), ThemePreference::default())
    }

    pub fn with_settings(settings: Settings, theme: ThemePreference) -> Self {
        Self {
            query: String::new(),
            outcome: LookupOutcome::Idle,
            theme,
            sequencing: settings.behavior.sequencing(),
            latest_request: None,
            next_request: 1,
            last_submitted: None,
            notice: None,
            loading_frame: 0,
            phase: AppPhase::Running,
            settings,
        }
    }

    /// Start a lookup for `query`.
    ///
    /// Blank or whitespace-only input is ignored and returns `None`. Otherwise
    /// the trimmed query replaces the search text, a new request id is issued,
    /// any previous profile or error is dropped and the outcome becomes
    /// `Loading`.
    pub fn submit_query(&mut self, query: &str) -> Option<(RequestId, String)> {
        let username = query.trim();
        if username.is_empty() {
            trace!("Ignoring blank query");
            return None;
        }
        let username = username.to_string();

        let request_id = self.next_request;
        self.next_request += 1;

        self.query = username.clone();
        self.latest_request = Some(request_id);
        self.last_submitted = Some(username.clone());
        self.outcome = LookupOutcome::Loading;
        self.notice = None;
        self.loading_frame = 0;

        debug!("Lookup #{} started for '{}'", request_id, username);
        Some((request_id, username))
    }

    /// Apply a fetcher resolution. Returns whether it changed the outcome.
    ///
    /// In sequenced mode only the latest request's resolution is applied. In
    /// legacy mode every resolution is applied in arrival order.
    pub fn apply_resolution(&mut self, request_id: RequestId, outcome: LookupOutcome) -> bool {
        if !outcome.is_settled() {
            warn!(
                "Lookup #{} resolved to non-terminal '{}', ignoring",
                request_id,
                outcome.label()
            );
            return false;
        }

        if self.sequencing == LookupSequencing::Sequenced && self.is_stale(request_id) {
            debug!(
                "Discarding stale lookup #{} (latest is {:?})",
                request_id, self.latest_request
            );
            return false;
        }

        debug!("Lookup #{} resolved: {}", request_id, outcome.label());
        self.outcome = outcome;
        true
    }

    /// A request is stale once a newer one has been issued
    pub fn is_stale(&self, request_id: RequestId) -> bool {
        self.latest_request != Some(request_id)
    }

    /// Flip the theme and return the new value
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.outcome.profile()
    }

    /// Profile page of the displayed profile
    pub fn profile_link(&self) -> Option<String> {
        self.profile()?.profile_url.clone()
    }

    /// Normalized blog link of the displayed profile
    pub fn blog_link(&self) -> Option<String> {
        normalize_blog_url(self.profile()?.blog_url.as_deref())
    }

    pub fn tick(&mut self) {
        if self.outcome.is_loading() {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfinder_fetch::test_utils::sample_profile;

    fn legacy_state() -> AppState {
        let mut settings = Settings::default();
        settings.behavior.sequence_lookups = false;
        AppState::with_settings(settings, ThemePreference::Dark)
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = AppState::new();
        assert_eq!(state.outcome, LookupOutcome::Idle);
        assert_eq!(state.theme, ThemePreference::Dark);
        assert_eq!(state.sequencing, LookupSequencing::Sequenced);
        assert!(state.latest_request.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_submit_blank_is_noop() {
        let mut state = AppState::new();
        state.query = "   ".to_string();

        assert!(state.submit_query("").is_none());
        assert!(state.submit_query(" \t ").is_none());
        assert_eq!(state.outcome, LookupOutcome::Idle);
        assert!(state.latest_request.is_none());
        assert_eq!(state.query, "   ");
    }

    #[test]
    fn test_submit_enters_loading_and_trims() {
        let mut state = AppState::new();
        let (id, username) = state.submit_query("  octocat ").unwrap();

        assert_eq!(id, 1);
        assert_eq!(username, "octocat");
        assert_eq!(state.query, "octocat");
        assert!(state.outcome.is_loading());
        assert_eq!(state.latest_request, Some(1));
    }

    #[test]
    fn test_request_ids_are_monotonic() {
        let mut state = AppState::new();
        let (a, _) = state.submit_query("a").unwrap();
        let (b, _) = state.submit_query("b").unwrap();
        let (c, _) = state.submit_query("c").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_submit_drops_previous_profile_and_error() {
        let mut state = AppState::new();
        let (id, _) = state.submit_query("octocat").unwrap();
        state.apply_resolution(id, LookupOutcome::Success(sample_profile("octocat")));
        assert!(state.profile().is_some());

        state.submit_query("other").unwrap();
        assert!(state.profile().is_none());
        assert!(state.outcome.error_message().is_none());
    }

    #[test]
    fn test_failure_clears_profile() {
        let mut state = AppState::new();
        let (id, _) = state.submit_query("octocat").unwrap();
        state.apply_resolution(id, LookupOutcome::Success(sample_profile("octocat")));

        let (id, _) = state.submit_query("doesnotexist123xyz").unwrap();
        state.apply_resolution(id, LookupOutcome::NotFound);

        assert_eq!(state.outcome, LookupOutcome::NotFound);
        assert!(state.profile().is_none());
    }

    #[test]
    fn test_sequenced_discards_stale_resolution() {
        let mut state = AppState::new();
        let (first, _) = state.submit_query("alice").unwrap();
        let (second, _) = state.submit_query("bob").unwrap();

        assert!(state.apply_resolution(second, LookupOutcome::Success(sample_profile("bob"))));
        assert!(!state.apply_resolution(first, LookupOutcome::Success(sample_profile("alice"))));

        assert_eq!(state.profile().map(|p| p.login.as_str()), Some("bob"));
    }

    #[test]
    fn test_sequenced_stale_resolution_does_not_leave_loading() {
        let mut state = AppState::new();
        let (first, _) = state.submit_query("alice").unwrap();
        state.submit_query("bob").unwrap();

        assert!(!state.apply_resolution(first, LookupOutcome::NotFound));
        assert!(state.outcome.is_loading());
    }

    #[test]
    fn test_legacy_last_arrival_wins() {
        let mut state = legacy_state();
        let (first, _) = state.submit_query("alice").unwrap();
        let (second, _) = state.submit_query("bob").unwrap();

        assert!(state.apply_resolution(second, LookupOutcome::Success(sample_profile("bob"))));
        assert!(state.apply_resolution(first, LookupOutcome::Success(sample_profile("alice"))));

        assert_eq!(state.profile().map(|p| p.login.as_str()), Some("alice"));
    }

    #[test]
    fn test_non_terminal_resolution_is_ignored() {
        let mut state = AppState::new();
        let (id, _) = state.submit_query("octocat").unwrap();
        assert!(!state.apply_resolution(id, LookupOutcome::Idle));
        assert!(state.outcome.is_loading());
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = AppState::new();
        assert_eq!(state.toggle_theme(), ThemePreference::Light);
        assert_eq!(state.toggle_theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_links_come_from_displayed_profile() {
        let mut state = AppState::new();
        assert!(state.profile_link().is_none());
        assert!(state.blog_link().is_none());

        let (id, _) = state.submit_query("octocat").unwrap();
        state.apply_resolution(id, LookupOutcome::Success(sample_profile("octocat")));

        assert_eq!(
            state.profile_link().as_deref(),
            Some("https://github.com/octocat")
        );
        assert_eq!(state.blog_link().as_deref(), Some("https://github.blog"));
    }

    #[test]
    fn test_tick_only_advances_while_loading() {
        let mut state = AppState::new();
        state.tick();
        assert_eq!(state.loading_frame, 0);

        state.submit_query("octocat").unwrap();
        state.tick();
        state.tick();
        assert_eq!(state.loading_frame, 2);
    }
}
