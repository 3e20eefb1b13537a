//! Wire types for the GitHub REST API

use chrono::{DateTime, Utc};
use devfinder_core::{non_blank, ProfileRecord};
use serde::Deserialize;

/// `GET /users/{username}` payload, limited to the fields devfinder shows.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

/// Error body GitHub sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl From<GithubUser> for ProfileRecord {
    fn from(user: GithubUser) -> Self {
        Self {
            login: user.login,
            display_name: non_blank(user.name),
            avatar_url: non_blank(user.avatar_url),
            bio: non_blank(user.bio),
            location: non_blank(user.location),
            company_name: non_blank(user.company),
            blog_url: non_blank(user.blog),
            social_handle: non_blank(user.twitter_username),
            profile_url: non_blank(user.html_url),
            created_at: user.created_at,
            public_repo_count: user.public_repos,
            follower_count: user.followers,
            following_count: user.following,
        }
    }
}
