//! # devfinder-fetch - GitHub Profile Lookups
//!
//! HTTP client for `GET /users/{username}` plus the [`ProfileSource`] seam
//! the application engine resolves lookups through.
//!
//! Every failure is folded into a [`LookupOutcome`](devfinder_core::LookupOutcome):
//! 404 is `NotFound`, everything else is `TransientError`.

pub mod client;
pub mod error;
pub mod source;
pub mod types;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{
    ClientOptions, GithubClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use error::FetchError;
pub use source::{LocalProfileSource, ProfileSource};
pub use types::{ApiErrorBody, GithubUser};
