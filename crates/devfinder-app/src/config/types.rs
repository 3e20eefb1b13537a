//! Configuration types for devfinder
//!
//! Defines:
//! - `Settings` - Global application settings from `config.toml`
//! - `ApiSettings`, `BehaviorSettings`, `UiSettings` - its sections
//! - `LookupSequencing` - how overlapping lookups are resolved

use std::time::Duration;

use devfinder_fetch::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Profile API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL; `/users/{username}` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiSettings {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            user_agent: self.user_agent.clone(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Lookup behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Apply only the latest lookup's result. `false` applies every result
    /// in arrival order.
    #[serde(default = "default_true")]
    pub sequence_lookups: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            sequence_lookups: true,
        }
    }
}

impl BehaviorSettings {
    pub fn sequencing(&self) -> LookupSequencing {
        if self.sequence_lookups {
            LookupSequencing::Sequenced
        } else {
            LookupSequencing::Legacy
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Browser command for opening links (empty = platform default)
    #[serde(default)]
    pub browser: String,

    /// Show the key hint footer
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            browser: String::new(),
            show_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// How lookup resolutions are applied when several are in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupSequencing {
    /// Only the most recently issued request may update the outcome
    #[default]
    Sequenced,
    /// Every resolution is applied in arrival order; the last to arrive wins
    Legacy,
}
