//! Domain types for the template catalog and pipeline configuration

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Error, Result};

/// The read-only category holding the built-in system prompts
pub const PROTECTED_CATEGORY: &str = "System";

/// Selection-target category bound into the translation slot
pub const TRANSLATE_CATEGORY: &str = "Translate";

/// Selection-target category bound into the polishing slot
pub const POLISHING_CATEGORY: &str = "Polishing";

/// Extension appended to new template names that carry none
pub const DEFAULT_EXTENSION: &str = "txt";

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// A template namespace.
///
/// Categories are opaque names; three are well-known: `System` (protected,
/// read-only), `Translate` and `Polishing` (selection targets whose templates
/// can be bound into the pipeline configuration). Categories are fetched once
/// per session and cached; there is no category CRUD.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether writes into this category are refused
    pub fn is_protected(&self) -> bool {
        self.0 == PROTECTED_CATEGORY
    }

    /// Whether a template in this category can be bound into the pipeline config
    pub fn is_selection_target(&self) -> bool {
        self.selection_slot().is_some()
    }

    /// The pipeline config slot this category binds into, if any
    pub fn selection_slot(&self) -> Option<SelectionSlot> {
        match self.0.as_str() {
            TRANSLATE_CATEGORY => Some(SelectionSlot::Translation),
            POLISHING_CATEGORY => Some(SelectionSlot::Polishing),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection slots and binding records
// ─────────────────────────────────────────────────────────────────────────────

/// The two well-known keys of the pipeline configuration a template can be
/// bound under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionSlot {
    Translation,
    Polishing,
}

impl SelectionSlot {
    /// Key inside the pipeline configuration object
    pub fn config_key(self) -> &'static str {
        match self {
            SelectionSlot::Translation => "translation_prompt_selection",
            SelectionSlot::Polishing => "polishing_prompt_selection",
        }
    }

    /// Short label used in status messages
    pub fn label(self) -> &'static str {
        match self {
            SelectionSlot::Translation => "translation",
            SelectionSlot::Polishing => "polishing",
        }
    }
}

/// Snapshot of an applied template stored inside the pipeline configuration.
///
/// `prompt_content` is a verbatim copy taken at the moment of application;
/// later edits to the source template do not change an existing record until
/// apply is invoked again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRecord {
    /// Template name without its extension
    pub last_selected_id: String,
    /// Verbatim template content at application time
    pub prompt_content: String,
}

impl BindingRecord {
    /// Build a record from a template filename and its content.
    /// The filename's extension is stripped for the identifier.
    pub fn from_template(name: &str, content: &str) -> Self {
        Self {
            last_selected_id: template_stem(name).to_string(),
            prompt_content: content.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline configuration
// ─────────────────────────────────────────────────────────────────────────────

/// The external configuration object consumed by the translation pipeline.
///
/// Treated as an opaque JSON mapping: this subsystem only understands the two
/// selection-slot keys and must preserve every other key verbatim across
/// load/merge/save. Merges are copy-on-write; the previous value stays valid
/// until a persist succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineConfig(Map<String, Value>);

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed JSON value. Fails unless the value is an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::config(format!(
                "pipeline config must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Raw access to a key, for callers that pass through foreign fields
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The binding record stored under the given slot, if present and well-formed
    pub fn binding(&self, slot: SelectionSlot) -> Option<BindingRecord> {
        let value = self.0.get(slot.config_key())?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Shallow copy with the slot key replaced by `record`.
    ///
    /// All other keys are carried over untouched. The receiver is not
    /// modified; the caller installs the returned value only after
    /// persistence confirms.
    pub fn with_binding(&self, slot: SelectionSlot, record: BindingRecord) -> Self {
        let mut map = self.0.clone();
        let mut entry = Map::new();
        entry.insert(
            "last_selected_id".to_string(),
            Value::String(record.last_selected_id),
        );
        entry.insert(
            "prompt_content".to_string(),
            Value::String(record.prompt_content),
        );
        map.insert(slot.config_key().to_string(), Value::Object(entry));
        Self(map)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Template names
// ─────────────────────────────────────────────────────────────────────────────

/// Normalize an operator-entered template name.
///
/// Rejects empty/whitespace-only names and names containing path separators
/// (templates are flat within a category). Appends `default_ext` when the
/// name carries no extension, so `"foo"` and `"foo.txt"` refer to the same
/// template.
pub fn normalize_template_name(raw: &str, default_ext: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_name(raw));
    }
    if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
        return Err(Error::invalid_name(raw));
    }
    if has_extension(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}.{default_ext}"))
    }
}

fn has_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && !ext.is_empty(),
        None => false,
    }
}

/// The template name with its final extension stripped.
/// Names without an extension (and dotfiles) come back unchanged.
pub fn template_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => stem,
        _ => name,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of an operator notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A non-fatal notification surfaced in the status bar.
///
/// Every failed store operation becomes one of these; none of them ends the
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_protected_category() {
        assert!(Category::from(PROTECTED_CATEGORY).is_protected());
        assert!(!Category::from(TRANSLATE_CATEGORY).is_protected());
        assert!(!Category::from("Glossary").is_protected());
    }

    #[test]
    fn test_selection_slots() {
        assert_eq!(
            Category::from(TRANSLATE_CATEGORY).selection_slot(),
            Some(SelectionSlot::Translation)
        );
        assert_eq!(
            Category::from(POLISHING_CATEGORY).selection_slot(),
            Some(SelectionSlot::Polishing)
        );
        assert_eq!(Category::from(PROTECTED_CATEGORY).selection_slot(), None);
        assert!(!Category::from(PROTECTED_CATEGORY).is_selection_target());
    }

    #[test]
    fn test_slot_config_keys() {
        assert_eq!(
            SelectionSlot::Translation.config_key(),
            "translation_prompt_selection"
        );
        assert_eq!(
            SelectionSlot::Polishing.config_key(),
            "polishing_prompt_selection"
        );
    }

    #[test]
    fn test_normalize_appends_default_extension() {
        assert_eq!(normalize_template_name("foo", "txt").unwrap(), "foo.txt");
        assert_eq!(
            normalize_template_name("foo.txt", "txt").unwrap(),
            "foo.txt"
        );
        assert_eq!(
            normalize_template_name("foo.json", "txt").unwrap(),
            "foo.json"
        );
        assert_eq!(
            normalize_template_name("  padded  ", "txt").unwrap(),
            "padded.txt"
        );
    }

    #[test]
    fn test_normalize_rejects_empty_names() {
        assert!(matches!(
            normalize_template_name("", "txt"),
            Err(Error::InvalidName { .. })
        ));
        assert!(matches!(
            normalize_template_name("   ", "txt"),
            Err(Error::InvalidName { .. })
        ));
    }

    #[test]
    fn test_normalize_rejects_path_separators() {
        assert!(normalize_template_name("a/b", "txt").is_err());
        assert!(normalize_template_name("a\\b", "txt").is_err());
        assert!(normalize_template_name("..", "txt").is_err());
    }

    #[test]
    fn test_template_stem() {
        assert_eq!(template_stem("a.txt"), "a");
        assert_eq!(template_stem("a.b.txt"), "a.b");
        assert_eq!(template_stem("noext"), "noext");
        assert_eq!(template_stem(".hidden"), ".hidden");
    }

    #[test]
    fn test_binding_record_strips_extension() {
        let record = BindingRecord::from_template("a.txt", "Hello World");
        assert_eq!(record.last_selected_id, "a");
        assert_eq!(record.prompt_content, "Hello World");
    }

    #[test]
    fn test_pipeline_config_rejects_non_objects() {
        assert!(PipelineConfig::from_value(json!([1, 2])).is_err());
        assert!(PipelineConfig::from_value(json!("text")).is_err());
        assert!(PipelineConfig::from_value(json!({})).is_ok());
    }

    #[test]
    fn test_with_binding_preserves_unknown_keys() {
        let config = PipelineConfig::from_value(json!({
            "target_language": "en",
            "concurrency": 4,
        }))
        .unwrap();

        let merged = config.with_binding(
            SelectionSlot::Translation,
            BindingRecord::from_template("a.txt", "Hello"),
        );

        assert_eq!(merged.get("target_language"), Some(&json!("en")));
        assert_eq!(merged.get("concurrency"), Some(&json!(4)));
        let record = merged.binding(SelectionSlot::Translation).unwrap();
        assert_eq!(record.last_selected_id, "a");
        assert_eq!(record.prompt_content, "Hello");

        // Copy-on-write: the original is untouched
        assert!(config.binding(SelectionSlot::Translation).is_none());
    }

    #[test]
    fn test_with_binding_replaces_existing_slot() {
        let config = PipelineConfig::new().with_binding(
            SelectionSlot::Polishing,
            BindingRecord::from_template("old.txt", "old"),
        );
        let merged = config.with_binding(
            SelectionSlot::Polishing,
            BindingRecord::from_template("new.txt", "new"),
        );

        let record = merged.binding(SelectionSlot::Polishing).unwrap();
        assert_eq!(record.last_selected_id, "new");
        assert_eq!(record.prompt_content, "new");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = PipelineConfig::from_value(json!({
            "translation_prompt_selection": {
                "last_selected_id": "a",
                "prompt_content": "Hello"
            },
            "extra": {"nested": true},
        }))
        .unwrap();

        let text = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
