//! Directory-backed store: one `<key>.json` file per key

use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError, validate_key};
use crate::config::{lock_exclusive, write_atomic, write_locked_atomic};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        read_if_exists(&self.path_for(key)?)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        write_locked_atomic(&path, value.as_bytes())?;
        tracing::trace!("Wrote {}", path.display());
        Ok(())
    }

    fn update_raw<F>(&self, key: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(Option<String>) -> Result<String, StoreError>,
    {
        let path = self.path_for(key)?;
        // Same lock as set_raw, held from the read through the rename
        let _lock = lock_exclusive(&path)?;
        let updated = f(read_if_exists(&path)?)?;
        write_atomic(&path, updated.as_bytes())?;
        tracing::trace!("Updated {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("store"));

        assert_eq!(store.get_raw("settings").unwrap(), None);

        store.set("settings", &vec!["bank", "usps"]).unwrap();
        assert!(dir.path().join("store").join("settings.json").exists());
        let value: Vec<String> = store.get_or("settings", Vec::new());
        assert_eq!(value, vec!["bank", "usps"]);

        store.remove("settings").unwrap();
        assert_eq!(store.get_raw("settings").unwrap(), None);
        store.remove("settings").unwrap();
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(dir.path().join("scanHistory.json"), "[{]").unwrap();

        let value: Vec<u32> = store.get_or("scanHistory", vec![1]);
        assert_eq!(value, vec![1]);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("store"));

        std::thread::scope(|scope| {
            for t in 0..8u32 {
                let store = store.clone();
                scope.spawn(move || {
                    for i in 0..5u32 {
                        store
                            .update("counts", Vec::<u32>::new(), |v| v.push(t * 10 + i))
                            .unwrap();
                    }
                });
            }
        });

        let counts: Vec<u32> = store.get_or("counts", Vec::new());
        assert_eq!(counts.len(), 40);
    }

    #[test]
    fn test_update_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("a").join("b"));
        store.update("settings", 1u32, |n| *n += 1).unwrap();
        assert_eq!(store.get_or("settings", 0u32), 2);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        let err = store.set_raw("../escape", "{}").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }
}
