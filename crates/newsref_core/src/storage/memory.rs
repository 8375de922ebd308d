//! HashMap-backed storage for tests and ephemeral sessions.

use super::{StorageBackend, StorageResult};
use std::collections::HashMap;

/// In-memory blob store. Contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    entries: HashMap<String, String>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl StorageBackend for InMemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
