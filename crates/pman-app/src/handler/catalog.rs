//! Category/template selection and list completion handlers
//!
//! Holds the last-request-wins policy: every list/content request is tagged
//! with a token taken at issue time, and completions carrying a token that no
//! longer matches the current selection are discarded.

use pman_core::prelude::*;
use pman_core::Category;

use crate::state::{AppState, EditorPhase};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_categories_loaded(
    state: &mut AppState,
    categories: Vec<Category>,
) -> UpdateResult {
    // Fetched once per session; later responses would only repeat the cache
    state.categories = categories;
    state.categories_loaded = true;
    if state.category_cursor >= state.categories.len() {
        state.category_cursor = 0;
    }
    UpdateResult::none()
}

pub(crate) fn handle_categories_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.notify_error(format!("Failed to load categories: {error}"));
    UpdateResult::none()
}

/// Replace the active category and request its template list.
///
/// Clears the selection and edit buffer immediately: switching away discards
/// unsaved edits without warning.
pub(crate) fn handle_select_category(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(category) = state.categories.get(index).cloned() else {
        return UpdateResult::none();
    };

    state.active_category = Some(category.clone());
    state.templates.clear();
    state.template_cursor = 0;
    state.filter.clear();
    state.filter_input = false;
    state.clear_selection();

    let token = state.next_token();
    state.templates_token = token;
    UpdateResult::action(UpdateAction::LoadTemplates { token, category })
}

pub(crate) fn handle_templates_loaded(
    state: &mut AppState,
    token: u64,
    templates: Vec<String>,
) -> UpdateResult {
    if token != state.templates_token {
        debug!("Discarding stale template list (token {})", token);
        return UpdateResult::none();
    }

    state.templates = templates;
    state.clamp_template_cursor();

    // Create flow: the refreshed list is here, now select the new template
    if let Some(name) = state.pending_select.take() {
        if state.templates.iter().any(|t| t == &name) {
            return select_template_by_name(state, name);
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_templates_load_failed(
    state: &mut AppState,
    token: u64,
    error: String,
) -> UpdateResult {
    if token != state.templates_token {
        debug!("Discarding stale template list failure (token {})", token);
        return UpdateResult::none();
    }
    state.pending_select = None;
    state.notify_error(format!("Failed to list templates: {error}"));
    UpdateResult::none()
}

/// Select a template by its row in the filtered list
pub(crate) fn handle_select_template(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(name) = state.visible_template_at(index) else {
        return UpdateResult::none();
    };
    select_template_by_name(state, name)
}

/// Issue a content load for `name` within the active category
pub(crate) fn select_template_by_name(state: &mut AppState, name: String) -> UpdateResult {
    let Some(category) = state.active_category.clone() else {
        return UpdateResult::none();
    };

    state.editor = EditorPhase::Loading;
    let token = state.next_token();
    state.content_token = token;
    UpdateResult::action(UpdateAction::LoadContent {
        token,
        category,
        name,
    })
}

pub(crate) fn handle_content_loaded(
    state: &mut AppState,
    token: u64,
    category: Category,
    name: String,
    text: String,
) -> UpdateResult {
    if token != state.content_token {
        debug!("Discarding stale content for {}/{}", category, name);
        return UpdateResult::none();
    }
    state.install_buffer(category, name, text);
    UpdateResult::none()
}

/// A failed load leaves the previous selection and buffer intact
pub(crate) fn handle_content_load_failed(
    state: &mut AppState,
    token: u64,
    error: String,
) -> UpdateResult {
    if token != state.content_token {
        debug!("Discarding stale content failure (token {})", token);
        return UpdateResult::none();
    }
    state.editor = if state.selected.is_some() {
        EditorPhase::Viewing
    } else {
        EditorPhase::NoSelection
    };
    state.notify_error(format!("Failed to load template: {error}"));
    UpdateResult::none()
}
