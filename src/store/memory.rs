use std::collections::HashMap;
use std::sync::Mutex;

use super::{KeyValueStore, StoreError, validate_key};

/// In-process store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Every write is a single insert or remove, so poisoning is ignored.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.values().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn update_raw<F>(&self, key: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(Option<String>) -> Result<String, StoreError>,
    {
        validate_key(key)?;
        let mut values = self.values();
        let updated = f(values.get(key).cloned())?;
        values.insert(key.to_string(), updated);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.values().remove(key);
        Ok(())
    }
}
