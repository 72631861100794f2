//! # pman-store - Template Library Persistence
//!
//! The transport layer between the catalog controller and whatever holds the
//! template library. Pure adapters: no catalog state lives here.
//!
//! Depends on [`pman_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Store Contract
//! - [`TemplateStore`] - Async list/read/write contract (Send futures)
//! - [`LocalTemplateStore`] - Non-Send variant for single-threaded callers
//!
//! ### Implementations
//! - [`FsTemplateStore`] - Category directories and template files on disk
//! - [`JsonConfigStore`] - The pipeline configuration JSON file
//! - `MemoryTemplateStore` - In-memory store for tests (behind the
//!   `test-helpers` feature)

pub mod config;
pub mod fs;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod store;

// Public API re-exports
pub use config::JsonConfigStore;
pub use fs::FsTemplateStore;
#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemoryTemplateStore;
pub use store::{LocalTemplateStore, TemplateStore};

use pman_core::{Category, POLISHING_CATEGORY, PROTECTED_CATEGORY, TRANSLATE_CATEGORY};

/// Order category names for stable display: the well-known categories come
/// first in their canonical order, anything else follows alphabetically.
pub(crate) fn order_categories(mut names: Vec<String>) -> Vec<Category> {
    names.sort_by(|a, b| canonical_rank(a).cmp(&canonical_rank(b)).then(a.cmp(b)));
    names.into_iter().map(Category::new).collect()
}

fn canonical_rank(name: &str) -> usize {
    match name {
        PROTECTED_CATEGORY => 0,
        TRANSLATE_CATEGORY => 1,
        POLISHING_CATEGORY => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_categories_canonical_first() {
        let ordered = order_categories(vec![
            "Polishing".to_string(),
            "Glossary".to_string(),
            "System".to_string(),
            "Translate".to_string(),
            "Archive".to_string(),
        ]);

        let names: Vec<&str> = ordered.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["System", "Translate", "Polishing", "Archive", "Glossary"]
        );
    }
}
