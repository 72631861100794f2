//! Action execution - the async side of the update loop
//!
//! `update` returns an [`UpdateAction`]; the event loop hands it to
//! [`handle_action`], which spawns the store call and feeds the completion
//! back through the message channel. Every outcome becomes a message; no
//! store error escapes as a panic or a dropped future.

use std::sync::Arc;

use tokio::sync::mpsc;

use pman_core::prelude::*;
use pman_store::{JsonConfigStore, TemplateStore};

use crate::binder;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute one action against the stores and produce its completion message.
pub async fn perform_action<S: TemplateStore + Sync>(
    action: UpdateAction,
    store: &S,
    config_store: &JsonConfigStore,
) -> Message {
    match action {
        UpdateAction::LoadCategories => match store.list_categories().await {
            Ok(categories) => Message::CategoriesLoaded { categories },
            Err(e) => Message::CategoriesLoadFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::LoadConfig => match config_store.load() {
            Ok(config) => Message::ConfigLoaded { config },
            Err(e) => Message::ConfigLoadFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::LoadTemplates { token, category } => {
            match store.list_templates(&category).await {
                Ok(templates) => Message::TemplatesLoaded { token, templates },
                Err(e) => Message::TemplatesLoadFailed {
                    token,
                    error: e.to_string(),
                },
            }
        }

        UpdateAction::LoadContent {
            token,
            category,
            name,
        } => match store.get_content(&category, &name).await {
            Ok(text) => Message::ContentLoaded {
                token,
                category,
                name,
                text,
            },
            Err(e) => Message::ContentLoadFailed {
                token,
                error: e.to_string(),
            },
        },

        UpdateAction::SaveTemplate {
            category,
            name,
            text,
        } => match store.save_content(&category, &name, &text).await {
            Ok(()) => Message::SaveCompleted { category, name },
            Err(e) => Message::SaveFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::CreateTemplate { category, name } => {
            // Creation is a save of empty content
            match store.save_content(&category, &name, "").await {
                Ok(()) => Message::CreateCompleted { category, name },
                Err(e) => Message::CreateFailed {
                    error: e.to_string(),
                },
            }
        }

        UpdateAction::ApplyBinding {
            slot,
            name,
            content,
            config,
        } => {
            // Merge, persist, and only then hand the merged copy back
            let merged = binder::bind(&config, slot, &name, &content);
            match config_store.save(&merged) {
                Ok(()) => Message::ApplyCompleted {
                    slot,
                    config: merged,
                },
                Err(e) => Message::ApplyFailed {
                    error: e.to_string(),
                },
            }
        }
    }
}

/// Spawn an action and send its completion back through `tx`.
pub fn handle_action<S>(
    action: UpdateAction,
    store: Arc<S>,
    config_store: Arc<JsonConfigStore>,
    tx: mpsc::Sender<Message>,
) where
    S: TemplateStore + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = perform_action(action, store.as_ref(), config_store.as_ref()).await;
        if tx.send(message).await.is_err() {
            warn!("Message channel closed; dropping store completion");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pman_core::Category;
    use pman_store::MemoryTemplateStore;
    use tempfile::TempDir;

    fn config_store(dir: &TempDir) -> JsonConfigStore {
        JsonConfigStore::new(dir.path().join("pipeline.json"))
    }

    #[tokio::test]
    async fn test_load_categories_action() {
        let dir = TempDir::new().unwrap();
        let store = MemoryTemplateStore::new();

        let msg = perform_action(UpdateAction::LoadCategories, &store, &config_store(&dir)).await;

        match msg {
            Message::CategoriesLoaded { categories } => {
                let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
                assert_eq!(names, vec!["System", "Translate", "Polishing"]);
            }
            other => panic!("expected CategoriesLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_failure_becomes_message() {
        let dir = TempDir::new().unwrap();
        let store = MemoryTemplateStore::new();
        store.set_fail_writes(true);

        let msg = perform_action(
            UpdateAction::SaveTemplate {
                category: Category::from("Translate"),
                name: "a.txt".to_string(),
                text: "hello".to_string(),
            },
            &store,
            &config_store(&dir),
        )
        .await;

        assert!(matches!(msg, Message::SaveFailed { .. }));
    }

    #[tokio::test]
    async fn test_create_action_writes_empty_template() {
        let dir = TempDir::new().unwrap();
        let store = MemoryTemplateStore::new();

        let msg = perform_action(
            UpdateAction::CreateTemplate {
                category: Category::from("Translate"),
                name: "fresh.txt".to_string(),
            },
            &store,
            &config_store(&dir),
        )
        .await;

        assert!(matches!(msg, Message::CreateCompleted { .. }));
        assert_eq!(store.stored("Translate", "fresh.txt"), Some(String::new()));
    }

    #[tokio::test]
    async fn test_apply_persists_before_completing() {
        let dir = TempDir::new().unwrap();
        let store = MemoryTemplateStore::new();
        let config_store = config_store(&dir);

        let msg = perform_action(
            UpdateAction::ApplyBinding {
                slot: pman_core::SelectionSlot::Translation,
                name: "a.txt".to_string(),
                content: "Hello World".to_string(),
                config: pman_core::PipelineConfig::new(),
            },
            &store,
            &config_store,
        )
        .await;

        let merged = match msg {
            Message::ApplyCompleted { config, .. } => config,
            other => panic!("expected ApplyCompleted, got {:?}", other),
        };

        // The completion carries exactly what was written to disk
        let on_disk = config_store.load().unwrap();
        assert_eq!(on_disk, merged);
        let record = on_disk
            .binding(pman_core::SelectionSlot::Translation)
            .unwrap();
        assert_eq!(record.last_selected_id, "a");
        assert_eq!(record.prompt_content, "Hello World");
    }
}
