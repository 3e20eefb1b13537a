//! Test doubles for [`ProfileSource`]
//!
//! Available under `cfg(test)` and the `test-helpers` feature so downstream
//! crates can drive the engine without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use devfinder_core::{LookupOutcome, ProfileRecord};

use crate::source::ProfileSource;

#[derive(Debug, Clone)]
struct Scripted {
    outcome: LookupOutcome,
    delay: Option<Duration>,
}

/// Canned outcomes keyed by username, with optional per-username latency.
///
/// Unknown usernames resolve to `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileSource {
    scripted: HashMap<String, Scripted>,
    calls: Arc<AtomicUsize>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StaticProfileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `username` to `outcome` immediately.
    pub fn with(mut self, username: &str, outcome: LookupOutcome) -> Self {
        self.scripted.insert(
            username.to_string(),
            Scripted {
                outcome,
                delay: None,
            },
        );
        self
    }

    /// Resolve `username` to `outcome` after `delay`.
    pub fn with_delay(mut self, username: &str, outcome: LookupOutcome, delay: Duration) -> Self {
        self.scripted.insert(
            username.to_string(),
            Scripted {
                outcome,
                delay: Some(delay),
            },
        );
        self
    }

    /// Shorthand for a successful lookup of [`sample_profile`].
    pub fn with_profile(self, username: &str) -> Self {
        self.with(username, LookupOutcome::Success(sample_profile(username)))
    }

    /// Number of lookups started so far (shared across clones)
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Usernames looked up, in call order
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|names| names.clone())
            .unwrap_or_default()
    }
}

impl ProfileSource for StaticProfileSource {
    async fn lookup(&self, username: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut names) = self.requested.lock() {
            names.push(username.to_string());
        }

        let scripted = self.scripted.get(username).cloned();
        match scripted {
            Some(Scripted { outcome, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                outcome
            }
            None => LookupOutcome::NotFound,
        }
    }
}

/// A fully populated profile for `login`, joined 3 Aug 2011.
pub fn sample_profile(login: &str) -> ProfileRecord {
    let created_at = Utc
        .with_ymd_and_hms(2011, 8, 3, 0, 0, 0)
        .single()
        .unwrap_or_default();
    let mut record = ProfileRecord::new(login, created_at);
    record.display_name = Some(format!("{login} (display)"));
    record.bio = Some("Writes Rust".to_string());
    record.location = Some("San Francisco".to_string());
    record.company_name = Some("@github".to_string());
    record.blog_url = Some("github.blog".to_string());
    record.social_handle = Some(login.to_string());
    record.profile_url = Some(format!("https://github.com/{login}"));
    record.public_repo_count = 8;
    record.follower_count = 3938;
    record.following_count = 9;
    record
}
