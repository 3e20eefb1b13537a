//! Display formatting for profiles
//!
//! Pure helpers shared by every render layer. [`ProfileView::from_record`]
//! turns a [`ProfileRecord`] into ready-to-paint text so the TUI and the
//! headless JSON output agree on every string.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::profile::ProfileRecord;

/// Placeholder for absent optional fields
pub const NOT_AVAILABLE: &str = "Not available";

/// Placeholder for an absent bio
pub const NO_BIO: &str = "This profile has no bio";

const DEFAULT_SCHEME: &str = "https://";
const SOCIAL_BASE_URL: &str = "https://twitter.com/";

/// `"Joined 3 Aug 2011"`: unpadded day, English short month, 4-digit year (UTC).
pub fn format_joined(created_at: &DateTime<Utc>) -> String {
    format!("Joined {}", created_at.format("%-d %b %Y"))
}

/// Link target for a blog field.
///
/// Returns `None` for an absent or blank value. Values that already start with
/// `http://` or `https://` (any case) pass through; anything else gets
/// `https://` prepended.
pub fn normalize_blog_url(blog: Option<&str>) -> Option<String> {
    let blog = blog.map(str::trim).filter(|b| !b.is_empty())?;
    let lower = blog.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(blog.to_string())
    } else {
        Some(format!("{DEFAULT_SCHEME}{blog}"))
    }
}

/// Counts are plain integers; zero is a value, not "not available".
pub fn format_count(count: u64) -> String {
    count.to_string()
}

/// Profile page for a Twitter/X handle, tolerating a leading `@`
pub fn social_url(handle: &str) -> String {
    format!("{SOCIAL_BASE_URL}{}", handle.trim_start_matches('@'))
}

/// One line of profile detail: its text and, when it is a link, the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub available: bool,
}

impl DisplayField {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
            available: true,
        }
    }

    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            text: NOT_AVAILABLE.to_string(),
            link: None,
            available: false,
        }
    }

    fn from_optional(value: Option<&str>) -> Self {
        value.map_or_else(Self::unavailable, Self::text)
    }
}

/// Everything a render layer paints for a found profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub display_name: String,
    /// `@login`
    pub handle: String,
    pub joined: String,
    pub bio: String,
    pub has_bio: bool,
    pub repos: String,
    pub followers: String,
    pub following: String,
    pub location: DisplayField,
    pub blog: DisplayField,
    pub social: DisplayField,
    pub company: DisplayField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

impl ProfileView {
    pub fn from_record(record: &ProfileRecord) -> Self {
        let blog = match (
            record.blog_url.as_deref(),
            normalize_blog_url(record.blog_url.as_deref()),
        ) {
            (Some(text), Some(link)) => DisplayField::link(text.trim(), link),
            _ => DisplayField::unavailable(),
        };

        let social = record
            .social_handle
            .as_deref()
            .map(|h| h.trim_start_matches('@'))
            .filter(|h| !h.is_empty())
            .map_or_else(DisplayField::unavailable, |h| {
                DisplayField::link(format!("@{h}"), social_url(h))
            });

        Self {
            display_name: record.display_name().to_string(),
            handle: format!("@{}", record.login),
            joined: format_joined(&record.created_at),
            bio: record.bio.clone().unwrap_or_else(|| NO_BIO.to_string()),
            has_bio: record.bio.is_some(),
            repos: format_count(record.public_repo_count),
            followers: format_count(record.follower_count),
            following: format_count(record.following_count),
            location: DisplayField::from_optional(record.location.as_deref()),
            blog,
            social,
            company: DisplayField::from_optional(record.company_name.as_deref()),
            avatar_url: record.avatar_url.clone(),
            profile_url: record.profile_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_format_joined() {
        assert_eq!(format_joined(&ts("2011-08-03T00:00:00Z")), "Joined 3 Aug 2011");
        assert_eq!(format_joined(&ts("2011-01-25T18:44:36Z")), "Joined 25 Jan 2011");
    }

    #[test]
    fn test_format_joined_is_repeatable() {
        let created = ts("2011-08-03T00:00:00Z");
        assert_eq!(format_joined(&created), format_joined(&created));
    }

    #[test]
    fn test_normalize_blog_url_adds_https() {
        assert_eq!(
            normalize_blog_url(Some("example.com")),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_blog_url_keeps_existing_scheme() {
        assert_eq!(
            normalize_blog_url(Some("http://example.com")),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            normalize_blog_url(Some("HTTPS://Example.com/blog")),
            Some("HTTPS://Example.com/blog".to_string())
        );
    }

    #[test]
    fn test_normalize_blog_url_blank_is_none() {
        assert_eq!(normalize_blog_url(None), None);
        assert_eq!(normalize_blog_url(Some("")), None);
        assert_eq!(normalize_blog_url(Some("  ")), None);
    }

    #[test]
    fn test_zero_count_renders_as_zero() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(3938), "3938");
    }

    #[test]
    fn test_view_for_sparse_record() {
        let record = ProfileRecord::new("ghost", ts("2011-08-03T00:00:00Z"));
        let view = ProfileView::from_record(&record);

        assert_eq!(view.display_name, "ghost");
        assert_eq!(view.handle, "@ghost");
        assert_eq!(view.joined, "Joined 3 Aug 2011");
        assert_eq!(view.bio, NO_BIO);
        assert!(!view.has_bio);
        assert_eq!(view.repos, "0");
        assert_eq!(view.followers, "0");
        assert_eq!(view.following, "0");
        assert_eq!(view.blog, DisplayField::unavailable());
        assert_eq!(view.blog.text, NOT_AVAILABLE);
        assert!(view.blog.link.is_none());
        assert!(!view.location.available);
        assert!(!view.social.available);
        assert!(!view.company.available);
    }

    #[test]
    fn test_view_for_full_record() {
        let mut record = ProfileRecord::new("octocat", ts("2011-01-25T18:44:36Z"));
        record.display_name = Some("The Octocat".into());
        record.bio = Some("Mascot".into());
        record.location = Some("San Francisco".into());
        record.company_name = Some("@github".into());
        record.blog_url = Some("github.blog".into());
        record.social_handle = Some("octocat".into());
        record.public_repo_count = 8;

        let view = ProfileView::from_record(&record);

        assert_eq!(view.display_name, "The Octocat");
        assert_eq!(view.bio, "Mascot");
        assert_eq!(view.repos, "8");
        assert_eq!(view.location, DisplayField::text("San Francisco"));
        assert_eq!(view.company.text, "@github");
        assert_eq!(view.blog.text, "github.blog");
        assert_eq!(view.blog.link.as_deref(), Some("https://github.blog"));
        assert_eq!(view.social.text, "@octocat");
        assert_eq!(
            view.social.link.as_deref(),
            Some("https://twitter.com/octocat")
        );
    }
}
