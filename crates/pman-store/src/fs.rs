//! Filesystem-backed template store
//!
//! Categories are immediate subdirectories of the library root; templates are
//! regular files inside them. Payloads are always raw text.

use std::path::{Path, PathBuf};

use pman_core::prelude::*;
use pman_core::{Category, POLISHING_CATEGORY, PROTECTED_CATEGORY, TRANSLATE_CATEGORY};

use crate::store::{require_flat_name, TemplateStore};

/// Template store over a library root directory on disk
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Seed the three well-known category directories so a fresh library is
    /// browsable. Existing directories are left alone.
    pub fn ensure_layout(&self) -> Result<()> {
        for name in [PROTECTED_CATEGORY, TRANSLATE_CATEGORY, POLISHING_CATEGORY] {
            std::fs::create_dir_all(self.root.join(name))
                .map_err(|e| Error::transport(format!("create category {name}: {e}")))?;
        }
        Ok(())
    }

    fn category_dir(&self, category: &Category) -> PathBuf {
        self.root.join(category.name())
    }
}

impl TemplateStore for FsTemplateStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| Error::transport(format!("read library root: {e}")))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::transport(format!("read library root: {e}")))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::transport(format!("read library root: {e}")))?;
            if file_type.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(crate::order_categories(names))
    }

    async fn list_templates(&self, category: &Category) -> Result<Vec<String>> {
        let dir = self.category_dir(category);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::category_not_found(category.name()));
            }
            Err(e) => return Err(Error::transport(format!("read category {category}: {e}"))),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::transport(format!("read category {category}: {e}")))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::transport(format!("read category {category}: {e}")))?;
            if file_type.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    async fn get_content(&self, category: &Category, name: &str) -> Result<String> {
        require_flat_name(name)?;
        let path = self.category_dir(category).join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::template_not_found(category.name(), name))
            }
            Err(e) => Err(Error::transport(format!(
                "read template {category}/{name}: {e}"
            ))),
        }
    }

    async fn save_content(&self, category: &Category, name: &str, text: &str) -> Result<()> {
        if category.is_protected() {
            return Err(Error::read_only(category.name()));
        }
        require_flat_name(name)?;

        let dir = self.category_dir(category);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::transport(format!("create category {category}: {e}")))?;

        tokio::fs::write(dir.join(name), text)
            .await
            .map_err(|e| Error::transport(format!("write template {category}/{name}: {e}")))?;

        debug!("Saved template {}/{} ({} bytes)", category, name, text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FsTemplateStore) {
        let dir = TempDir::new().expect("tempdir");
        let store = FsTemplateStore::new(dir.path());
        store.ensure_layout().expect("layout");
        (dir, store)
    }

    #[tokio::test]
    async fn test_ensure_layout_seeds_well_known_categories() {
        let (_dir, store) = store();
        let categories = store.list_categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["System", "Translate", "Polishing"]);
    }

    #[tokio::test]
    async fn test_save_then_get_round_trips() {
        let (_dir, store) = store();
        let category = Category::from("Translate");

        store
            .save_content(&category, "a.txt", "Hello")
            .await
            .unwrap();

        let text = store.get_content(&category, "a.txt").await.unwrap();
        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let (_dir, store) = store();
        let category = Category::from("Translate");

        store.save_content(&category, "a.txt", "old").await.unwrap();
        store.save_content(&category, "a.txt", "new").await.unwrap();

        assert_eq!(store.get_content(&category, "a.txt").await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_protected_category_refuses_writes() {
        let (_dir, store) = store();
        let category = Category::from("System");

        let err = store
            .save_content(&category, "base.txt", "payload")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ReadOnly { .. }));

        // The store is unchanged
        let err = store.get_content(&category, "base.txt").await.unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[tokio::test]
    async fn test_unknown_category_fails_listing() {
        let (_dir, store) = store();
        let err = store
            .list_templates(&Category::from("Missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CategoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_template_fails_read() {
        let (_dir, store) = store();
        let err = store
            .get_content(&Category::from("Translate"), "nope.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[tokio::test]
    async fn test_listing_is_sorted() {
        let (_dir, store) = store();
        let category = Category::from("Polishing");

        for name in ["c.txt", "a.txt", "b.txt"] {
            store.save_content(&category, name, "").await.unwrap();
        }

        let names = store.list_templates(&category).await.unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[tokio::test]
    async fn test_traversal_names_rejected() {
        let (_dir, store) = store();
        let category = Category::from("Translate");

        let err = store
            .save_content(&category, "../escape.txt", "x")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));

        let err = store
            .get_content(&category, "a/../../b.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[tokio::test]
    async fn test_subdirectories_are_not_templates() {
        let (dir, store) = store();
        std::fs::create_dir(dir.path().join("Translate").join("nested")).unwrap();
        let category = Category::from("Translate");
        store.save_content(&category, "a.txt", "x").await.unwrap();

        let names = store.list_templates(&category).await.unwrap();
        assert_eq!(names, vec!["a.txt"]);
    }
}
