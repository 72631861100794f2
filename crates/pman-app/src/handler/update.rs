//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{apply, catalog, create, editing, keys::handle_key, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }
        Message::MoveUp => {
            move_cursor(state, -1);
            UpdateResult::none()
        }
        Message::MoveDown => {
            move_cursor(state, 1);
            UpdateResult::none()
        }
        Message::Activate => activate(state),

        // ─────────────────────────────────────────────────────────
        // Edit buffer
        // ─────────────────────────────────────────────────────────
        Message::StartEditing => editing::handle_start_editing(state),
        Message::StopEditing => editing::handle_stop_editing(state),
        Message::EditInsert(c) => editing::handle_edit(state, |s| s.buffer_insert(c)),
        Message::EditNewline => editing::handle_edit(state, |s| s.buffer_insert('\n')),
        Message::EditBackspace => editing::handle_edit(state, AppState::buffer_backspace),
        Message::EditDelete => editing::handle_edit(state, AppState::buffer_delete),
        Message::CursorLeft => editing::handle_edit(state, AppState::cursor_left),
        Message::CursorRight => editing::handle_edit(state, AppState::cursor_right),
        Message::CursorUp => editing::handle_edit(state, AppState::cursor_up),
        Message::CursorDown => editing::handle_edit(state, AppState::cursor_down),
        Message::CursorHome => editing::handle_edit(state, AppState::cursor_line_home),
        Message::CursorEnd => editing::handle_edit(state, AppState::cursor_line_end),

        // ─────────────────────────────────────────────────────────
        // Persistence intents
        // ─────────────────────────────────────────────────────────
        Message::RequestSave => editing::handle_request_save(state),
        Message::RequestApply => apply::handle_request_apply(state),

        // ─────────────────────────────────────────────────────────
        // Create dialog
        // ─────────────────────────────────────────────────────────
        Message::StartCreate => create::handle_start_create(state),
        Message::CancelCreate => create::handle_cancel_create(state),
        Message::CreateInput(c) => create::handle_create_input(state, c),
        Message::CreateBackspace => create::handle_create_backspace(state),
        Message::ConfirmCreate => create::handle_confirm_create(state),

        // ─────────────────────────────────────────────────────────
        // Filter
        // ─────────────────────────────────────────────────────────
        Message::StartFilter => {
            state.filter_input = true;
            state.focus = Focus::Templates;
            UpdateResult::none()
        }
        Message::FilterInput(c) => {
            state.filter.push(c);
            state.clamp_template_cursor();
            UpdateResult::none()
        }
        Message::FilterBackspace => {
            state.filter.pop();
            state.clamp_template_cursor();
            UpdateResult::none()
        }
        Message::EndFilter => {
            state.filter_input = false;
            UpdateResult::none()
        }
        Message::ClearFilter => {
            state.filter.clear();
            state.filter_input = false;
            state.clamp_template_cursor();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Store completions
        // ─────────────────────────────────────────────────────────
        Message::CategoriesLoaded { categories } => {
            catalog::handle_categories_loaded(state, categories)
        }
        Message::CategoriesLoadFailed { error } => {
            catalog::handle_categories_load_failed(state, error)
        }
        Message::TemplatesLoaded { token, templates } => {
            catalog::handle_templates_loaded(state, token, templates)
        }
        Message::TemplatesLoadFailed { token, error } => {
            catalog::handle_templates_load_failed(state, token, error)
        }
        Message::ContentLoaded {
            token,
            category,
            name,
            text,
        } => catalog::handle_content_loaded(state, token, category, name, text),
        Message::ContentLoadFailed { token, error } => {
            catalog::handle_content_load_failed(state, token, error)
        }
        Message::SaveCompleted { category, name } => {
            editing::handle_save_completed(state, category, name)
        }
        Message::SaveFailed { error } => editing::handle_save_failed(state, error),
        Message::CreateCompleted { category, name } => {
            create::handle_create_completed(state, category, name)
        }
        Message::CreateFailed { error } => create::handle_create_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Pipeline configuration completions
        // ─────────────────────────────────────────────────────────
        Message::ConfigLoaded { config } => {
            state.config = config;
            UpdateResult::none()
        }
        Message::ConfigLoadFailed { error } => {
            state.notify_error(format!("Failed to load pipeline config: {error}"));
            UpdateResult::none()
        }
        Message::ApplyCompleted { slot, config } => apply::handle_apply_completed(state, slot, config),
        Message::ApplyFailed { error } => apply::handle_apply_failed(state, error),
    }
}

/// Act on the focused row
fn activate(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Categories => catalog::handle_select_category(state, state.category_cursor),
        Focus::Templates => catalog::handle_select_template(state, state.template_cursor),
        Focus::Editor => editing::handle_start_editing(state),
    }
}

/// Move the focused list cursor by one row
fn move_cursor(state: &mut AppState, delta: i32) {
    match state.focus {
        Focus::Categories => {
            state.category_cursor =
                step(state.category_cursor, delta, state.categories.len());
        }
        Focus::Templates => {
            state.template_cursor =
                step(state.template_cursor, delta, state.visible_templates().len());
        }
        // List navigation does not touch the editor pane
        Focus::Editor => {}
    }
}

fn step(cursor: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (cursor + delta as usize).min(len - 1)
    }
}
