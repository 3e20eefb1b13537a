//! Translate OS termination signals into `Message::Quit`

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use devfinder_core::prelude::*;

/// Spawn the signal listener. It sends at most one `Message::Quit`.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match termination_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Message channel closed before {} was delivered", name);
                }
            }
            Err(e) => error!("Signal handler unavailable: {}", e),
        }
    })
}

fn listen_error(what: &str, e: std::io::Error) -> Error {
    Error::terminal(format!("Failed to listen for {}: {}", what, e))
}

#[cfg(unix)]
async fn termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).map_err(|e| listen_error("SIGINT", e))?;
    let mut sigterm = signal(SignalKind::terminate()).map_err(|e| listen_error("SIGTERM", e))?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| listen_error("Ctrl+C", e))?;
    Ok("Ctrl+C")
}
