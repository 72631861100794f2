//! In-memory template store for tests
//!
//! Mirrors the contract of [`FsTemplateStore`] without touching disk, with a
//! switch to make writes fail so transport-failure paths can be exercised.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use pman_core::prelude::*;
use pman_core::{Category, POLISHING_CATEGORY, PROTECTED_CATEGORY, TRANSLATE_CATEGORY};

use crate::store::{require_flat_name, TemplateStore};

type Shelves = BTreeMap<String, BTreeMap<String, String>>;

/// Template store backed by a shared map. Cloning shares the contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    shelves: Arc<Mutex<Shelves>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryTemplateStore {
    /// A store seeded with the three well-known categories, all empty
    pub fn new() -> Self {
        let store = Self::default();
        {
            let mut shelves = store.shelves.lock().expect("store poisoned");
            for name in [PROTECTED_CATEGORY, TRANSLATE_CATEGORY, POLISHING_CATEGORY] {
                shelves.insert(name.to_string(), BTreeMap::new());
            }
        }
        store
    }

    /// Seed a template directly, bypassing the read-only check
    pub fn insert(&self, category: &str, name: &str, content: &str) {
        let mut shelves = self.shelves.lock().expect("store poisoned");
        shelves
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), content.to_string());
    }

    /// When set, every `save_content` call fails with a transport error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Direct lookup for test assertions
    pub fn stored(&self, category: &str, name: &str) -> Option<String> {
        let shelves = self.shelves.lock().expect("store poisoned");
        shelves.get(category)?.get(name).cloned()
    }
}

impl TemplateStore for MemoryTemplateStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let names: Vec<String> = {
            let shelves = self.shelves.lock().expect("store poisoned");
            shelves.keys().cloned().collect()
        };
        Ok(crate::order_categories(names))
    }

    async fn list_templates(&self, category: &Category) -> Result<Vec<String>> {
        let shelves = self.shelves.lock().expect("store poisoned");
        let shelf = shelves
            .get(category.name())
            .ok_or_else(|| Error::category_not_found(category.name()))?;
        Ok(shelf.keys().cloned().collect())
    }

    async fn get_content(&self, category: &Category, name: &str) -> Result<String> {
        require_flat_name(name)?;
        let shelves = self.shelves.lock().expect("store poisoned");
        shelves
            .get(category.name())
            .and_then(|shelf| shelf.get(name))
            .cloned()
            .ok_or_else(|| Error::template_not_found(category.name(), name))
    }

    async fn save_content(&self, category: &Category, name: &str, text: &str) -> Result<()> {
        if category.is_protected() {
            return Err(Error::read_only(category.name()));
        }
        require_flat_name(name)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::transport("simulated write failure"));
        }

        let mut shelves = self.shelves.lock().expect("store poisoned");
        shelves
            .entry(category.name().to_string())
            .or_default()
            .insert(name.to_string(), text.to_string());
        Ok(())
    }
}
