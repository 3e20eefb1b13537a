//! devfinder - look up GitHub developer profiles from the terminal
//!
//! This is the binary entry point: it parses arguments, wires the engine to
//! the GitHub client and theme store, then hands off to the TUI or headless
//! runner.

mod headless;

use std::path::{Path, PathBuf};

use clap::Parser;
use devfinder_app::config::{self, Settings};
use devfinder_app::{Engine, FileThemeStore, MemoryThemeStore, ThemeStore};
use devfinder_core::prelude::*;
use devfinder_fetch::GithubClient;

/// devfinder - look up GitHub developer profiles from the terminal
#[derive(Parser, Debug)]
#[command(name = "devfinder", version)]
#[command(about = "Look up GitHub developer profiles from the terminal", long_about = None)]
struct Args {
    /// GitHub username to look up on start
    #[arg(value_name = "USERNAME")]
    username: Option<String>,

    /// Look up USERNAME, print JSON events and exit (no TUI)
    #[arg(long, requires = "username")]
    headless: bool,

    /// Profile API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "N")]
    timeout_secs: Option<u64>,

    /// Apply lookup results in arrival order, even stale ones
    #[arg(long)]
    legacy_unsequenced: bool,

    /// Directory holding config.toml and state.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Do not read or write the saved theme
    #[arg(long)]
    no_persist: bool,
}

impl Args {
    /// Theme store for this run: in memory with `--no-persist`, else
    /// `state.toml` under `config_dir`.
    fn theme_store(&self, config_dir: &Path) -> Box<dyn ThemeStore> {
        if self.no_persist {
            Box::new(MemoryThemeStore::new())
        } else {
            Box::new(FileThemeStore::new(config_dir))
        }
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.base_url {
            settings.api.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.api.timeout_secs = timeout_secs;
        }
        if self.legacy_unsequenced {
            settings.behavior.sequence_lookups = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    devfinder_core::logging::init()?;

    let config_dir = args
        .config_dir
        .clone()
        .unwrap_or_else(config::default_config_dir);
    match config::init_config_dir(&config_dir) {
        Ok(()) => {}
        Err(e) if e.is_recoverable() => {
            warn!("Could not initialize {}: {}", config_dir.display(), e);
        }
        Err(e) => return Err(e),
    }

    let mut settings = config::load_settings(&config_dir);
    args.apply_overrides(&mut settings);
    info!(
        "Using {} (timeout {}s, {:?})",
        settings.api.base_url,
        settings.api.timeout_secs,
        settings.behavior.sequencing()
    );

    let client = GithubClient::new(&settings.api.client_options())
        .map_err(|e| Error::http_client(e.to_string()))
        .context("Building the profile API client")?;

    let theme_store = args.theme_store(&config_dir);
    let mut engine = Engine::new(settings, client, theme_store);

    if args.headless {
        let username = args.username.as_deref().unwrap_or_default();
        let mut stdout = std::io::stdout().lock();
        let found = headless::run_lookup(&mut engine, username, &mut stdout).await?;
        engine.shutdown();
        info!("devfinder headless exiting (found: {})", found);
        std::process::exit(if found { 0 } else { 1 });
    }

    if let Some(username) = &args.username {
        engine.submit(username);
    }

    let result = devfinder_tui::run(&mut engine);
    if let Err(ref e) = result {
        error!("Application error (fatal: {}): {:?}", e.is_fatal(), e);
    }

    info!("devfinder exiting");
    result
}
