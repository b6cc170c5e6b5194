#![deny(missing_docs)]
//! Filesystem-backed implementation of lexidian's [`SettingsStore`].
//!
//! Settings live in one JSON file. Parent directories are created lazily on
//! first save. Loading a missing file yields the defaults.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lexidian_types::{Settings, SettingsError, SettingsStore};

/// JSON-file settings store.
pub struct FsSettingsStore {
    path: PathBuf,
}

impl FsSettingsStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for FsSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(SettingsError::Io(e.to_string())),
        };

        // An empty file is treated like a missing one.
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        let value: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        Settings::from_json(value)
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(&settings.to_json()?)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| SettingsError::Io(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
