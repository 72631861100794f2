//! The template store contract
//!
//! Every operation is asynchronous and may fail with a transport error.
//! Implementations hold no catalog state; side effects are entirely the
//! backing service's.

use pman_core::prelude::*;
use pman_core::Category;

/// Typed request wrapper over the external persistence service.
///
/// Semantics the catalog controller relies on:
/// - `list_categories`: an empty result is valid.
/// - `list_templates`: fails with `CategoryNotFound` for an unknown category.
/// - `get_content`: fails with `TemplateNotFound` when the pair is absent.
/// - `save_content`: create-or-overwrite -- this is also the creation
///   primitive, there is no separate create call. Fails with `ReadOnly`
///   against the protected category, leaving the store unchanged.
#[trait_variant::make(TemplateStore: Send)]
pub trait LocalTemplateStore {
    /// List every category in the library
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// List template filenames within a category, sorted for stable display
    async fn list_templates(&self, category: &Category) -> Result<Vec<String>>;

    /// Read a template's text payload
    async fn get_content(&self, category: &Category, name: &str) -> Result<String>;

    /// Write a template's text payload, creating it if absent
    async fn save_content(&self, category: &Category, name: &str, text: &str) -> Result<()>;
}

/// Reject names that would escape the flat per-category namespace.
pub(crate) fn require_flat_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(Error::invalid_name(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_names_accepted() {
        assert!(require_flat_name("a.txt").is_ok());
        assert!(require_flat_name("with spaces.txt").is_ok());
        assert!(require_flat_name(".hidden").is_ok());
    }

    #[test]
    fn test_escaping_names_rejected() {
        assert!(require_flat_name("").is_err());
        assert!(require_flat_name("a/b.txt").is_err());
        assert!(require_flat_name("a\\b.txt").is_err());
        assert!(require_flat_name("../up.txt").is_err());
    }
}
