//! Main TUI runner - terminal lifecycle and event loop

use devfinder_app::Engine;
use devfinder_core::prelude::*;
use devfinder_fetch::ProfileSource;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives.
///
/// Restores the terminal on both normal exit and error.
pub fn run<S>(engine: &mut Engine<S>) -> Result<()>
where
    S: ProfileSource + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let result = run_loop(&mut term, engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: ProfileSource + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Lookup results, signal-driven quits
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving TUI");
    Ok(())
}
