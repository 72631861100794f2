//! Main TUI runner - entry point and event loop
//!
//! Wires the pieces together: terminal, settings, stores, and the TEA loop.
//! `update` stays synchronous; actions it returns are spawned through
//! `handle_action` and their completions come back over the message channel.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use pman_app::process::handle_action;
use pman_app::{config, update, AppState, Message, UpdateAction};
use pman_core::prelude::*;
use pman_store::{FsTemplateStore, JsonConfigStore};

use super::{event, render, terminal};

/// Run the TUI against a template library root.
///
/// `config_override` replaces the pipeline config location from settings.
pub async fn run(library_root: &Path, config_override: Option<PathBuf>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Load configuration
    let settings = config::load_settings(library_root);
    let config_path = config_override
        .unwrap_or_else(|| settings.pipeline_config_path(library_root));
    info!(
        "Opening library {:?} (pipeline config {:?})",
        library_root, config_path
    );

    // Stores: seed the category layout on first run
    let store = Arc::new(FsTemplateStore::new(library_root));
    store.ensure_layout()?;
    let config_store = Arc::new(JsonConfigStore::new(config_path));

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Kick off the initial loads
    for action in [UpdateAction::LoadCategories, UpdateAction::LoadConfig] {
        handle_action(action, store.clone(), config_store.clone(), msg_tx.clone());
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, store, config_store);

    // Restore terminal
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    store: Arc<FsTemplateStore>,
    config_store: Arc<JsonConfigStore>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain store completions (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &store, &config_store);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &store, &config_store);
        }
    }

    Ok(())
}

/// Feed one message through `update`, chasing follow-up messages and
/// dispatching any action onto the runtime.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    store: &Arc<FsTemplateStore>,
    config_store: &Arc<JsonConfigStore>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        next = result.message;
        if let Some(action) = result.action {
            handle_action(
                action,
                store.clone(),
                config_store.clone(),
                msg_tx.clone(),
            );
        }
    }
}
