//! Lookup seam between the state machine and the network

use devfinder_core::LookupOutcome;

use crate::client::GithubClient;

/// Resolves a username to a terminal [`LookupOutcome`].
///
/// Implementations never return `Idle` or `Loading` and never fail: every
/// transport or API problem is already folded into `NotFound` or
/// `TransientError`.
#[trait_variant::make(ProfileSource: Send)]
pub trait LocalProfileSource {
    async fn lookup(&self, username: &str) -> LookupOutcome;
}

impl ProfileSource for GithubClient {
    async fn lookup(&self, username: &str) -> LookupOutcome {
        self.lookup_outcome(username).await
    }
}
