//! Settings parser for `.promptman/config.toml`
//!
//! The settings file lives inside the library root and is entirely optional;
//! a missing or malformed file falls back to defaults with a warning.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use pman_core::DEFAULT_EXTENSION;

const SETTINGS_DIR: &str = ".promptman";
const SETTINGS_FILENAME: &str = "config.toml";

/// Default pipeline config filename next to the library root
const PIPELINE_CONFIG_FILENAME: &str = "pipeline_config.json";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub ui: UiSettings,
}

/// Settings for the template library itself
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extension appended to new template names that carry none
    pub default_extension: String,
    /// Pipeline config location; relative paths resolve against the library
    /// root. Defaults to `pipeline_config.json` in the root.
    pub config_file: Option<PathBuf>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            default_extension: DEFAULT_EXTENSION.to_string(),
            config_file: None,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How many notices to keep for the status bar history
    pub notice_history: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { notice_history: 50 }
    }
}

impl Settings {
    /// Resolve the pipeline config path against the library root
    pub fn pipeline_config_path(&self, root: &Path) -> PathBuf {
        match &self.library.config_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => root.join(path),
            None => root.join(PIPELINE_CONFIG_FILENAME),
        }
    }
}

/// Load settings from `<root>/.promptman/config.toml`.
///
/// Never fails: a missing file is the default configuration and a malformed
/// file is logged and ignored.
pub fn load_settings(root: &Path) -> Settings {
    let path = root.join(SETTINGS_DIR).join(SETTINGS_FILENAME);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Settings::default();
        }
    };

    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Invalid settings in {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.library.default_extension, "txt");
    }

    #[test]
    fn test_partial_settings_file() {
        let dir = TempDir::new().unwrap();
        let settings_dir = dir.path().join(SETTINGS_DIR);
        std::fs::create_dir_all(&settings_dir).unwrap();
        std::fs::write(
            settings_dir.join(SETTINGS_FILENAME),
            "[library]\ndefault_extension = \"md\"\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.library.default_extension, "md");
        assert_eq!(settings.ui.notice_history, 50);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let settings_dir = dir.path().join(SETTINGS_DIR);
        std::fs::create_dir_all(&settings_dir).unwrap();
        std::fs::write(settings_dir.join(SETTINGS_FILENAME), "not [valid toml").unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_pipeline_config_path_resolution() {
        let settings = Settings::default();
        let root = Path::new("/library");
        assert_eq!(
            settings.pipeline_config_path(root),
            PathBuf::from("/library/pipeline_config.json")
        );

        let mut settings = Settings::default();
        settings.library.config_file = Some(PathBuf::from("conf/pipeline.json"));
        assert_eq!(
            settings.pipeline_config_path(root),
            PathBuf::from("/library/conf/pipeline.json")
        );

        settings.library.config_file = Some(PathBuf::from("/etc/pipeline.json"));
        assert_eq!(
            settings.pipeline_config_path(root),
            PathBuf::from("/etc/pipeline.json")
        );
    }
}
