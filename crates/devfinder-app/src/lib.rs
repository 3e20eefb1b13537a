//! devfinder-app - Application state and orchestration for devfinder
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! profile-lookup view state, the Engine that owns the message loop,
//! configuration loading and theme persistence.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod theme_store;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, RequestId};
pub use theme_store::{FileThemeStore, MemoryThemeStore, ThemeStore};
