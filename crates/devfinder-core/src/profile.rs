//! Normalized developer profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The normalized result of a successful lookup.
///
/// `login` is always present. Every other descriptive field is optional and
/// degrades to a "not available" display value; counts are always present and
/// zero is a real value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Account login, unique per data-source account
    pub login: String,
    /// Human name; display falls back to `login`
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    /// Blog or homepage, possibly without a scheme
    pub blog_url: Option<String>,
    /// Twitter/X username without the leading `@`
    pub social_handle: Option<String>,
    /// Public profile page on the data source
    pub profile_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub public_repo_count: u64,
    pub follower_count: u64,
    pub following_count: u64,
}

impl ProfileRecord {
    /// Minimal record with every optional field absent and zero counts.
    pub fn new(login: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            login: login.into(),
            display_name: None,
            avatar_url: None,
            bio: None,
            location: None,
            company_name: None,
            blog_url: None,
            social_handle: None,
            profile_url: None,
            created_at,
            public_repo_count: 0,
            follower_count: 0,
            following_count: 0,
        }
    }

    /// Name to show in headings: the display name, or the login when absent
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.login)
    }
}

/// Collapse empty or whitespace-only optional strings to `None`.
///
/// The data source sends `""` for unset fields such as `blog`; the rest of the
/// program only ever sees `Some` for text worth showing.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap()
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let mut record = ProfileRecord::new("octocat", created());
        assert_eq!(record.display_name(), "octocat");

        record.display_name = Some("The Octocat".to_string());
        assert_eq!(record.display_name(), "The Octocat");
    }

    #[test]
    fn test_new_record_has_zero_counts() {
        let record = ProfileRecord::new("ghost", created());
        assert_eq!(record.public_repo_count, 0);
        assert_eq!(record.follower_count, 0);
        assert_eq!(record.following_count, 0);
        assert!(record.bio.is_none());
    }

    #[test]
    fn test_non_blank_collapses_empty_strings() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(
            non_blank(Some(" San Francisco ".to_string())),
            Some("San Francisco".to_string())
        );
    }
}
