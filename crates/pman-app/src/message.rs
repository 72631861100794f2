//! Message types for the application (TEA pattern)

use pman_core::{Category, PipelineConfig, SelectionSlot};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the session
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Intents
    // ─────────────────────────────────────────────────────────
    /// Cycle pane focus forward (Tab)
    FocusNext,
    /// Cycle pane focus backward (Shift+Tab)
    FocusPrev,
    /// Move the focused list cursor up
    MoveUp,
    /// Move the focused list cursor down
    MoveDown,
    /// Act on the focused row (select category/template, enter edit mode)
    Activate,

    // ─────────────────────────────────────────────────────────
    // Edit Buffer Intents
    // ─────────────────────────────────────────────────────────
    /// Enter edit mode on the viewed template
    StartEditing,
    /// Leave edit mode, keeping unsaved buffer changes
    StopEditing,
    EditInsert(char),
    EditNewline,
    EditBackspace,
    EditDelete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,

    // ─────────────────────────────────────────────────────────
    // Persistence Intents
    // ─────────────────────────────────────────────────────────
    /// Save the edit buffer to the selected template
    RequestSave,
    /// Bind the viewed template into the pipeline configuration
    RequestApply,

    // ─────────────────────────────────────────────────────────
    // Create Dialog
    // ─────────────────────────────────────────────────────────
    StartCreate,
    CancelCreate,
    CreateInput(char),
    CreateBackspace,
    ConfirmCreate,

    // ─────────────────────────────────────────────────────────
    // Template Filter
    // ─────────────────────────────────────────────────────────
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    /// Keep the filter, leave input mode
    EndFilter,
    /// Drop the filter entirely
    ClearFilter,

    // ─────────────────────────────────────────────────────────
    // Store Completions
    // ─────────────────────────────────────────────────────────
    CategoriesLoaded {
        categories: Vec<Category>,
    },
    CategoriesLoadFailed {
        error: String,
    },
    /// Template list for the request identified by `token`; stale tokens are
    /// discarded (last-request-wins)
    TemplatesLoaded {
        token: u64,
        templates: Vec<String>,
    },
    TemplatesLoadFailed {
        token: u64,
        error: String,
    },
    ContentLoaded {
        token: u64,
        category: Category,
        name: String,
        text: String,
    },
    ContentLoadFailed {
        token: u64,
        error: String,
    },
    SaveCompleted {
        category: Category,
        name: String,
    },
    SaveFailed {
        error: String,
    },
    CreateCompleted {
        category: Category,
        name: String,
    },
    CreateFailed {
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Pipeline Configuration Completions
    // ─────────────────────────────────────────────────────────
    ConfigLoaded {
        config: PipelineConfig,
    },
    ConfigLoadFailed {
        error: String,
    },
    /// The merged configuration was persisted; install it as the cached copy
    ApplyCompleted {
        slot: SelectionSlot,
        config: PipelineConfig,
    },
    ApplyFailed {
        error: String,
    },
}
