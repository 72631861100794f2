//! Edit buffer and save handlers
//!
//! Buffer edits are purely local; nothing reaches the store before
//! `RequestSave`. Read-only enforcement for the protected category lives
//! here, authoritatively; the TUI only mirrors it.

use pman_core::Category;

use crate::state::{AppState, EditorPhase};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_start_editing(state: &mut AppState) -> UpdateResult {
    if state.editor != EditorPhase::Viewing {
        return UpdateResult::none();
    }
    if state.selection_read_only() {
        state.notify_error("System templates are read-only");
        return UpdateResult::none();
    }
    state.editor = EditorPhase::Editing;
    UpdateResult::none()
}

pub(crate) fn handle_stop_editing(state: &mut AppState) -> UpdateResult {
    if state.editor == EditorPhase::Editing {
        state.editor = EditorPhase::Viewing;
    }
    UpdateResult::none()
}

/// Apply a local buffer operation while in edit mode
pub(crate) fn handle_edit(
    state: &mut AppState,
    op: impl FnOnce(&mut AppState),
) -> UpdateResult {
    if state.editor == EditorPhase::Editing {
        op(state);
    }
    UpdateResult::none()
}

/// Persist the edit buffer to the selected template.
///
/// Fails closed: a transport error preserves the buffer and surfaces a
/// notice. The `is_saving` guard keeps a second save from going out while
/// one is in flight.
pub(crate) fn handle_request_save(state: &mut AppState) -> UpdateResult {
    if state.is_saving {
        return UpdateResult::none();
    }
    let Some((category, name)) = state.selected.clone() else {
        return UpdateResult::none();
    };
    if !matches!(state.editor, EditorPhase::Viewing | EditorPhase::Editing) {
        return UpdateResult::none();
    }
    if category.is_protected() {
        state.notify_error("System templates are read-only");
        return UpdateResult::none();
    }

    state.is_saving = true;
    state.editor = EditorPhase::Saving;
    UpdateResult::action(UpdateAction::SaveTemplate {
        category,
        name,
        text: state.edit_buffer.clone(),
    })
}

pub(crate) fn handle_save_completed(
    state: &mut AppState,
    category: Category,
    name: String,
) -> UpdateResult {
    state.is_saving = false;
    if state.editor == EditorPhase::Saving {
        state.editor = EditorPhase::Viewing;
    }
    // Only clear the dirty flag if the buffer still belongs to what was saved
    if state.selected.as_ref() == Some(&(category.clone(), name.clone())) {
        state.dirty = false;
    }
    state.notify_info(format!("Saved {category}/{name}"));
    UpdateResult::none()
}

pub(crate) fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.is_saving = false;
    // Back to editing with the buffer untouched; the operator retries
    if state.editor == EditorPhase::Saving {
        state.editor = EditorPhase::Editing;
    }
    state.notify_error(format!("Save failed: {error}"));
    UpdateResult::none()
}
