//! New-template dialog handlers
//!
//! Creation is a save of empty content followed by a list refresh and a
//! selection of the new name. A name collision silently overwrites the
//! existing template; that matches the store's create-or-overwrite contract.

use pman_core::{normalize_template_name, Category};

use crate::state::{AppState, CreateDialog, EditorPhase};

use super::{UpdateAction, UpdateResult};

/// Open the create overlay. Valid from `NoSelection` and `Viewing` only, and
/// never for the protected category.
pub(crate) fn handle_start_create(state: &mut AppState) -> UpdateResult {
    if !matches!(
        state.editor,
        EditorPhase::NoSelection | EditorPhase::Viewing
    ) {
        return UpdateResult::none();
    }
    let Some(category) = &state.active_category else {
        state.notify_error("Select a category first");
        return UpdateResult::none();
    };
    if category.is_protected() {
        state.notify_error("System templates are read-only");
        return UpdateResult::none();
    }
    state.creating = Some(CreateDialog::default());
    UpdateResult::none()
}

pub(crate) fn handle_cancel_create(state: &mut AppState) -> UpdateResult {
    // Exits back to whatever phase the overlay was opened from
    state.creating = None;
    UpdateResult::none()
}

pub(crate) fn handle_create_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(dialog) = &mut state.creating {
        dialog.input.push(c);
    }
    UpdateResult::none()
}

pub(crate) fn handle_create_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = &mut state.creating {
        dialog.input.pop();
    }
    UpdateResult::none()
}

/// Validate and normalize the entered name, then create the template.
///
/// An invalid name keeps the dialog open so the operator can correct it.
pub(crate) fn handle_confirm_create(state: &mut AppState) -> UpdateResult {
    if state.is_saving {
        return UpdateResult::none();
    }
    let Some(dialog) = &state.creating else {
        return UpdateResult::none();
    };
    let Some(category) = state.active_category.clone() else {
        return UpdateResult::none();
    };

    let name = match normalize_template_name(&dialog.input, &state.settings.library.default_extension)
    {
        Ok(name) => name,
        Err(e) => {
            state.notify_error(e.to_string());
            return UpdateResult::none();
        }
    };

    state.creating = None;
    state.is_saving = true;
    UpdateResult::action(UpdateAction::CreateTemplate { category, name })
}

/// The empty template exists; refresh the list and select it once the
/// refreshed list lands.
pub(crate) fn handle_create_completed(
    state: &mut AppState,
    category: Category,
    name: String,
) -> UpdateResult {
    state.is_saving = false;
    state.notify_info(format!("Created {category}/{name}"));

    if state.active_category.as_ref() != Some(&category) {
        // Category switched while the create was in flight; nothing to refresh
        return UpdateResult::none();
    }

    state.pending_select = Some(name);
    let token = state.next_token();
    state.templates_token = token;
    UpdateResult::action(UpdateAction::LoadTemplates { token, category })
}

pub(crate) fn handle_create_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.is_saving = false;
    state.notify_error(format!("Create failed: {error}"));
    UpdateResult::none()
}
