//! Key event handlers for UI modes
//!
//! Pure mapping from key to semantic message; no state mutation happens here.
//! Mode priority: Ctrl+C, then the create overlay, then filter input, then
//! edit mode, then normal browsing.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, EditorPhase, Focus};

/// Convert a key press into a semantic message for the current mode
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits, whatever mode we are in
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.creating.is_some() {
        return handle_create_key(key);
    }

    if state.filter_input {
        return handle_filter_key(key);
    }

    if state.editor == EditorPhase::Editing {
        return handle_editing_key(key);
    }

    handle_browse_key(state, key)
}

fn handle_create_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelCreate),
        InputKey::Enter => Some(Message::ConfirmCreate),
        InputKey::Backspace => Some(Message::CreateBackspace),
        InputKey::Char(c) => Some(Message::CreateInput(c)),
        _ => None,
    }
}

fn handle_filter_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ClearFilter),
        InputKey::Enter => Some(Message::EndFilter),
        InputKey::Backspace => Some(Message::FilterBackspace),
        InputKey::Up => Some(Message::MoveUp),
        InputKey::Down => Some(Message::MoveDown),
        InputKey::Char(c) => Some(Message::FilterInput(c)),
        _ => None,
    }
}

fn handle_editing_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::StopEditing),
        InputKey::CharCtrl('s') => Some(Message::RequestSave),
        InputKey::Enter => Some(Message::EditNewline),
        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::Delete => Some(Message::EditDelete),
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Home => Some(Message::CursorHome),
        InputKey::End => Some(Message::CursorEnd),
        InputKey::Char(c) => Some(Message::EditInsert(c)),
        _ => None,
    }
}

fn handle_browse_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Up => Some(Message::MoveUp),
        InputKey::Down => Some(Message::MoveDown),
        InputKey::Enter => Some(Message::Activate),
        InputKey::Char('e') => {
            if state.focus == Focus::Editor || state.editor == EditorPhase::Viewing {
                Some(Message::StartEditing)
            } else {
                None
            }
        }
        InputKey::Char('n') => Some(Message::StartCreate),
        InputKey::Char('/') => Some(Message::StartFilter),
        InputKey::Char('a') => Some(Message::RequestApply),
        InputKey::CharCtrl('s') => Some(Message::RequestSave),
        _ => None,
    }
}
