use std::collections::HashMap;

use parking_lot::Mutex;

use crate::models::error::MediaError;
use crate::traits::key_value_store::KeyValueStore;

/// Process-local `KeyValueStore`.
///
/// Useful for previews and tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.lock().remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, MediaError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediaError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
