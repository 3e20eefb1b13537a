//! Configuration file parsing for devfinder
//!
//! Supports:
//! - `<config_dir>/devfinder/config.toml` - Global settings
//! - `<config_dir>/devfinder/state.toml` - Persisted theme (see `theme_store`)

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, init_config_dir, load_settings, CONFIG_FILENAME, STATE_FILENAME,
};
pub use types::*;
