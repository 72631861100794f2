//! Apply handlers - binding the viewed template into the pipeline config
//!
//! The merge itself is `binder::bind`; these handlers gate the request and
//! install the merged config only after persistence confirmed, so a failed
//! persist leaves the cached configuration untouched.

use pman_core::{PipelineConfig, SelectionSlot};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_request_apply(state: &mut AppState) -> UpdateResult {
    if state.is_saving {
        return UpdateResult::none();
    }
    let Some((category, name)) = state.selected.clone() else {
        state.notify_error("Select a template to apply");
        return UpdateResult::none();
    };
    let Some(slot) = category.selection_slot() else {
        state.notify_error(format!("{category} templates cannot be applied"));
        return UpdateResult::none();
    };

    state.is_saving = true;
    UpdateResult::action(UpdateAction::ApplyBinding {
        slot,
        name,
        content: state.edit_buffer.clone(),
        config: state.config.clone(),
    })
}

pub(crate) fn handle_apply_completed(
    state: &mut AppState,
    slot: SelectionSlot,
    config: PipelineConfig,
) -> UpdateResult {
    state.is_saving = false;
    let applied = config
        .binding(slot)
        .map(|record| record.last_selected_id)
        .unwrap_or_default();
    state.config = config;
    state.notify_info(format!("Applied \"{}\" as {} prompt", applied, slot.label()));
    UpdateResult::none()
}

pub(crate) fn handle_apply_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.is_saving = false;
    state.notify_error(format!("Apply failed: {error}"));
    UpdateResult::none()
}
