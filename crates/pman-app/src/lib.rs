//! pman-app - Catalog controller and orchestration for promptman
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the event vocabulary,
//! and [`handler::update`] the pure transition function. Asynchronous store
//! work is described by [`UpdateAction`] values and executed by
//! [`process::handle_action`] on the tokio runtime, which feeds completion
//! messages back into the loop.

pub mod binder;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use config::{load_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, CreateDialog, EditorPhase, Focus, SessionPhase};
