//! Theme preference persistence
//!
//! [`ThemeStore`] is synchronous and infallible from the caller's side:
//! `load` falls back to the default theme and `save` logs failures.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use devfinder_core::prelude::*;
use devfinder_core::ThemePreference;
use serde::{Deserialize, Serialize};

use crate::config::STATE_FILENAME;

/// Durable storage for the single theme flag
pub trait ThemeStore: Send {
    /// Stored preference, or `ThemePreference::default()` when nothing usable
    /// is stored.
    fn load(&self) -> ThemePreference;

    /// Overwrite the stored preference. Failures are logged, never returned.
    fn save(&self, theme: ThemePreference);
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct PersistedState {
    #[serde(default)]
    theme: Option<String>,
}

/// `theme = "light" | "dark"` in `state.toml` under the config directory.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(STATE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, theme: ThemePreference) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::storage(&self.path, "state file has no parent directory"))?;
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::storage(dir, format!("Failed to create directory: {}", e)))?;

        let state = PersistedState {
            theme: Some(theme.as_str().to_string()),
        };
        let content = toml::to_string(&state)
            .map_err(|e| Error::storage(&self.path, format!("Failed to serialize: {}", e)))?;

        // Atomic write: write to temp, then rename
        let temp_path = dir.join(format!(".{}.tmp", STATE_FILENAME));
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::storage(&temp_path, format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(&self.path, format!("Failed to rename temp file: {}", e)))?;

        Ok(())
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> ThemePreference {
        if !self.path.exists() {
            debug!("No theme state at {:?}, using default", self.path);
            return ThemePreference::default();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {:?}: {}", self.path, e);
                return ThemePreference::default();
            }
        };

        let state: PersistedState = match toml::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to parse {:?}: {}", self.path, e);
                return ThemePreference::default();
            }
        };

        match state.theme.as_deref().map(str::parse::<ThemePreference>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                warn!("Ignoring stored theme: {}", e);
                ThemePreference::default()
            }
            None => ThemePreference::default(),
        }
    }

    fn save(&self, theme: ThemePreference) {
        match self.write(theme) {
            Ok(()) => debug!("Saved theme '{}' to {:?}", theme, self.path),
            Err(e) => warn!("Failed to persist theme: {}", e),
        }
    }
}

/// In-process store for tests and `--no-persist` runs.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Arc<Mutex<Option<ThemePreference>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(theme))),
        }
    }

    /// Last saved value, `None` if nothing was ever stored
    pub fn stored(&self) -> Option<ThemePreference> {
        self.slot.lock().ok().and_then(|slot| *slot)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> ThemePreference {
        self.stored().unwrap_or_default()
    }

    fn save(&self, theme: ThemePreference) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(theme);
        }
    }
}
