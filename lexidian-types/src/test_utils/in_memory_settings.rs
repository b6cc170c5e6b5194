//! InMemorySettingsStore — a single JSON blob behind a `RwLock`.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::SettingsError;
use crate::settings::{Settings, SettingsStore};

/// Settings store that keeps the raw blob in memory.
///
/// Holding the blob (not a parsed [`Settings`]) lets tests seed partial or
/// malformed data and observe the merge-with-defaults behavior.
pub struct InMemorySettingsStore {
    blob: RwLock<serde_json::Value>,
}

impl InMemorySettingsStore {
    /// Create an empty store. Loading yields the defaults.
    pub fn new() -> Self {
        Self::with_blob(serde_json::Value::Null)
    }

    /// Create a store pre-seeded with a raw blob.
    pub fn with_blob(blob: serde_json::Value) -> Self {
        Self {
            blob: RwLock::new(blob),
        }
    }

    /// The raw blob as last saved.
    pub fn blob(&self) -> serde_json::Value {
        self.blob.read().map(|b| b.clone()).unwrap_or_default()
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let blob = self
            .blob
            .read()
            .map_err(|e| SettingsError::Io(e.to_string()))?
            .clone();
        Settings::from_json(blob)
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let value = settings.to_json()?;
        let mut blob = self
            .blob
            .write()
            .map_err(|e| SettingsError::Io(e.to_string()))?;
        *blob = value;
        Ok(())
    }
}
