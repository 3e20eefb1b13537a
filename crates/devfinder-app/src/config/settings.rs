//! Settings parser for `<config_dir>/devfinder/config.toml`

use super::types::Settings;
use devfinder_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const STATE_FILENAME: &str = "state.toml";
const APP_DIR: &str = "devfinder";

/// Platform config directory for devfinder, e.g. `~/.config/devfinder`.
///
/// Falls back to `./.devfinder` when the platform has no config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".devfinder"))
}

/// Load settings from `config.toml` in `config_dir`.
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults with a warning.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory and a commented default `config.toml`.
///
/// An existing file is left untouched.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))
            .with_context(|| format!("Initializing {}", config_dir.display()))?;
        info!("Created config directory {:?}", config_dir);
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# devfinder configuration

[api]
base_url = "https://api.github.com"
timeout_secs = 10
# user_agent = "devfinder"

[behavior]
# false applies every lookup result in arrival order (last to arrive wins)
sequence_lookups = true

[ui]
# Empty uses the platform opener (open / xdg-open / start)
browser = ""
show_hints = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupSequencing;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"
[api]
base_url = "http://127.0.0.1:9999"

[ui]
browser = "firefox"
show_hints = false
"#,
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.api.base_url, "http://127.0.0.1:9999");
        assert_eq!(settings.api.timeout_secs, 10);
        assert_eq!(settings.ui.browser, "firefox");
        assert!(!settings.ui.show_hints);
    }

    #[test]
    fn test_load_settings_invalid_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[api\nbase_url = ").unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("nested").join("devfinder");

        init_config_dir(&config_dir).unwrap();
        assert!(config_dir.join(CONFIG_FILENAME).exists());

        let settings = load_settings(&config_dir);
        assert_eq!(settings.api.base_url, "https://api.github.com");
        assert_eq!(settings.behavior.sequencing(), LookupSequencing::Sequenced);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[behavior]\nsequence_lookups = false\n").unwrap();

        init_config_dir(dir.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[behavior]\nsequence_lookups = false\n");
    }

    #[test]
    fn test_init_config_dir_under_a_file_is_recoverable() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config_dir(&blocker.join("devfinder")).unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
        assert!(err.is_recoverable());
    }
}
