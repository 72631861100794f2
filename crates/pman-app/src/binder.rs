//! Application binder - maps a selected template into the pipeline config
//!
//! The merge is pure and speculative: the caller persists the returned config
//! and installs it into its own cached copy only after the persist succeeds.

use pman_core::{BindingRecord, PipelineConfig, SelectionSlot};

/// Merge a template snapshot into a shallow copy of the pipeline config.
///
/// The record's identifier is the filename with its extension stripped; the
/// content is copied verbatim. Only selection-target categories have a slot,
/// so callers resolve the slot before getting here.
pub fn bind(
    config: &PipelineConfig,
    slot: SelectionSlot,
    template_name: &str,
    content: &str,
) -> PipelineConfig {
    config.with_binding(slot, BindingRecord::from_template(template_name, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_strips_extension_and_copies_content() {
        let config = PipelineConfig::new();
        let merged = bind(&config, SelectionSlot::Translation, "a.txt", "Hello World");

        let record = merged.binding(SelectionSlot::Translation).unwrap();
        assert_eq!(record.last_selected_id, "a");
        assert_eq!(record.prompt_content, "Hello World");
    }

    #[test]
    fn test_bind_leaves_source_config_untouched() {
        let config = PipelineConfig::new();
        let _ = bind(&config, SelectionSlot::Polishing, "tone.txt", "formal");
        assert!(config.binding(SelectionSlot::Polishing).is_none());
    }

    #[test]
    fn test_bind_preserves_other_slot_and_foreign_keys() {
        let config = PipelineConfig::from_value(json!({
            "translation_prompt_selection": {
                "last_selected_id": "a",
                "prompt_content": "old"
            },
            "target_language": "de"
        }))
        .unwrap();

        let merged = bind(&config, SelectionSlot::Polishing, "tone.txt", "formal");

        assert_eq!(
            merged.binding(SelectionSlot::Translation).unwrap().prompt_content,
            "old"
        );
        assert_eq!(merged.get("target_language"), Some(&json!("de")));
        assert_eq!(
            merged.binding(SelectionSlot::Polishing).unwrap().last_selected_id,
            "tone"
        );
    }
}
