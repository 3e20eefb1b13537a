use devfinder_core::{LookupOutcome, NO_RESULTS};
use thiserror::Error;

/// Errors returned by the GitHub profile client.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404 for this username.
    #[error("profile not found: {username}")]
    NotFound { username: String },

    /// Any other non-2xx response. `message` is the API's own error text.
    #[error("GitHub API returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot carry a `/users/{name}` path.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl FetchError {
    /// Fold the error into the lookup state machine.
    ///
    /// 404 becomes `NotFound`. Everything else is a `TransientError` carrying
    /// the upstream message when the API sent a non-blank one, else
    /// [`NO_RESULTS`].
    pub fn into_outcome(self) -> LookupOutcome {
        match self {
            FetchError::NotFound { .. } => LookupOutcome::NotFound,
            FetchError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => LookupOutcome::transient(message.trim()),
            _ => LookupOutcome::transient(NO_RESULTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = FetchError::NotFound {
            username: "doesnotexist123xyz".into(),
        };
        assert_eq!(err.into_outcome(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_status_prefers_upstream_message() {
        let err = FetchError::Status {
            status: 403,
            message: Some("API rate limit exceeded".into()),
        };
        assert_eq!(
            err.into_outcome(),
            LookupOutcome::transient("API rate limit exceeded")
        );
    }

    #[test]
    fn test_status_without_message_uses_literal() {
        let err = FetchError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.into_outcome(), LookupOutcome::transient(NO_RESULTS));

        let err = FetchError::Status {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(err.into_outcome(), LookupOutcome::transient(NO_RESULTS));
    }

    #[test]
    fn test_parse_failure_uses_literal() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FetchError::Deserialize {
            context: "users/octocat".into(),
            source,
        };
        assert_eq!(err.into_outcome(), LookupOutcome::transient(NO_RESULTS));
    }

    #[test]
    fn test_status_display_includes_code() {
        let err = FetchError::Status {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "GitHub API returned 503: no message");
    }
}
