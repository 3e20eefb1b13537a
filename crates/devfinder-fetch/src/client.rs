//! HTTP client for the GitHub users endpoint.
//!
//! Wraps `reqwest` with GitHub-specific status handling and typed response
//! deserialization. A 404 surfaces as [`FetchError::NotFound`]; any other
//! non-2xx response surfaces as [`FetchError::Status`] with the API's own
//! message when the body carries one.

use std::time::Duration;

use devfinder_core::{LookupOutcome, ProfileRecord};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::FetchError;
use crate::types::{ApiErrorBody, GithubUser};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("devfinder/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Connection settings for [`GithubClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Client for `GET {base}/users/{username}`.
///
/// Use [`GithubClient::new`] for production or [`GithubClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    /// Creates a client from explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`FetchError::InvalidBaseUrl`] if `base_url` does not
    /// parse or cannot carry a path.
    pub fn new(options: &ClientOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = Client::builder()
            .timeout(options.timeout)
            .connect_timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(&options.base_url).map_err(|e| FetchError::InvalidBaseUrl {
            url: options.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl {
                url: options.base_url.clone(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// Creates a client with default timeout and user agent against a custom
    /// base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`GithubClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        Self::new(&ClientOptions {
            base_url: base_url.to_string(),
            ..ClientOptions::default()
        })
    }

    /// `{base}/users/{username}` with the username as a single encoded segment.
    pub fn user_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username);
        }
        url
    }

    /// Fetches and normalizes one profile.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] on HTTP 404, or without a request for `.`
    ///   and `..`, which no account can be named and which a URL path cannot
    ///   carry as a segment.
    /// - [`FetchError::Status`] on any other non-2xx status.
    /// - [`FetchError::Http`] on network failure or timeout.
    /// - [`FetchError::Deserialize`] if the body is not a user object.
    pub async fn fetch_user(&self, username: &str) -> Result<ProfileRecord, FetchError> {
        if is_dot_segment(username) {
            return Err(FetchError::NotFound {
                username: username.to_string(),
            });
        }

        let url = self.user_url(username);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                username: username.to_string(),
            });
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let user: GithubUser =
            serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
                context: format!("users/{username}"),
                source: e,
            })?;

        Ok(user.into())
    }

    /// Runs [`fetch_user`](Self::fetch_user) and folds the result into a
    /// terminal [`LookupOutcome`].
    pub async fn lookup_outcome(&self, username: &str) -> LookupOutcome {
        match self.fetch_user(username).await {
            Ok(record) => LookupOutcome::Success(record),
            Err(e) => {
                match &e {
                    FetchError::NotFound { .. } => tracing::info!("No profile for '{}'", username),
                    other => tracing::warn!("Lookup for '{}' failed: {}", username, other),
                }
                e.into_outcome()
            }
        }
    }
}

/// `.` and `..` are dropped by URL path normalization
fn is_dot_segment(username: &str) -> bool {
    matches!(username.trim(), "." | "..")
}
