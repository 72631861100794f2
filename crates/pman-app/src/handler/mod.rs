//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode
//! - `catalog`: Category/template selection and list completions
//! - `editing`: Edit buffer and save handling
//! - `create`: New-template dialog handling
//! - `apply`: Binding a template into the pipeline configuration

pub(crate) mod apply;
pub(crate) mod catalog;
pub(crate) mod create;
pub(crate) mod editing;
pub(crate) mod keys;
pub(crate) mod update;


use pman_core::{Category, PipelineConfig, SelectionSlot};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the category list (once per session)
    LoadCategories,

    /// Load the pipeline configuration from disk
    LoadConfig,

    /// Fetch the template list for a category.
    /// `token` identifies the request; a completion with a stale token is
    /// discarded by the handler.
    LoadTemplates { token: u64, category: Category },

    /// Fetch one template's content
    LoadContent {
        token: u64,
        category: Category,
        name: String,
    },

    /// Persist the edit buffer to the selected template
    SaveTemplate {
        category: Category,
        name: String,
        text: String,
    },

    /// Create a template with empty content (save is the creation primitive)
    CreateTemplate { category: Category, name: String },

    /// Merge a template snapshot into the config and persist the result
    ApplyBinding {
        slot: SelectionSlot,
        name: String,
        content: String,
        config: PipelineConfig,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
