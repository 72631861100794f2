//! Pipeline configuration persistence
//!
//! The configuration file is owned by the translation pipeline; this store
//! treats it as an opaque JSON object and preserves every key it does not
//! understand. Writes take an exclusive advisory lock for concurrent write
//! protection.

use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use pman_core::prelude::*;
use pman_core::PipelineConfig;

/// Load/save access to the pipeline configuration JSON file
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration. A missing file is an empty object.
    pub fn load(&self) -> Result<PipelineConfig> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PipelineConfig::new());
            }
            Err(e) => return Err(Error::config(format!("read pipeline config: {e}"))),
        };

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("parse pipeline config: {e}")))?;
        PipelineConfig::from_value(value)
    }

    /// Persist the configuration, replacing the file contents.
    pub fn save(&self, config: &PipelineConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("create config directory: {e}")))?;
        }

        let content = serde_json::to_string_pretty(&config)
            .map_err(|e| Error::config(format!("serialize pipeline config: {e}")))?;

        // Open file with exclusive lock for concurrent write protection
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::config(format!("open pipeline config: {e}")))?;

        file.lock_exclusive()
            .map_err(|e| Error::config(format!("lock pipeline config: {e}")))?;

        let mut file = file;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::config(format!("write pipeline config: {e}")))?;
        file.write_all(b"\n")
            .map_err(|e| Error::config(format!("write pipeline config: {e}")))?;
        file.flush()
            .map_err(|e| Error::config(format!("flush pipeline config: {e}")))?;

        // Lock is released when the file handle drops
        info!("Saved pipeline config to {:?}", self.path);
        Ok(())
    }
}
