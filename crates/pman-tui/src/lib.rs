//! pman-tui - Terminal UI for promptman
//!
//! This crate provides the ratatui-based terminal interface over the
//! pman-app controller: terminal setup, event polling, the render tree,
//! and the event loop that wires update actions to the stores.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
