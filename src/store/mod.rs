//! Local key/value persistence
//!
//! Values are stored as JSON documents under short string keys. Reads go
//! through [`KeyValueStore::get_or`], which never fails: a missing, empty,
//! unreadable or undeserializable value yields the caller's fallback.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid store key: {0:?} (allowed: letters, digits, '-' and '_')")]
    InvalidKey(String),
}

/// Check that a key is non-empty and only uses `[A-Za-z0-9_-]`
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Deserialize a raw read, falling back on a missing, blank, unreadable or
/// invalid value
fn decode_or<T: DeserializeOwned>(
    key: &str,
    raw: Result<Option<String>, StoreError>,
    fallback: T,
) -> T {
    let raw = match raw {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return fallback,
        Err(e) => {
            tracing::warn!("Failed to read {:?} from store: {}", key, e);
            return fallback;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Stored {:?} is not valid, using default: {}", key, e);
            fallback
        }
    }
}

/// Raw string storage plus typed JSON helpers
pub trait KeyValueStore {
    /// Raw stored value, `None` when the key is absent
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Read-modify-write `key` as one step: `f` gets the current raw value
    /// and returns the replacement. Concurrent updates of the same key are
    /// serialized.
    fn update_raw<F>(&self, key: &str, f: F) -> Result<(), StoreError>
    where
        Self: Sized,
        F: FnOnce(Option<String>) -> Result<String, StoreError>;

    /// Read and deserialize `key`, substituting `fallback` on any failure
    fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T
    where
        Self: Sized,
    {
        decode_or(key, self.get_raw(key), fallback)
    }

    /// Load `key` (or `fallback`), apply `f` and store the result without
    /// letting another update of `key` interleave
    fn update<T, F>(&self, key: &str, fallback: T, f: F) -> Result<(), StoreError>
    where
        Self: Sized,
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        self.update_raw(key, |raw| {
            let mut value = decode_or(key, Ok(raw), fallback);
            f(&mut value);
            Ok(serde_json::to_string(&value)?)
        })
    }

    /// Serialize `value` as JSON and store it under `key`
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }
}
