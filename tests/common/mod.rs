//! Shared test utilities for store-backed integration tests

use tempfile::TempDir;

use safeguard::store::FileStore;

/// Creates a store rooted in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn create_test_store() -> (TempDir, FileStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().join("store"));
    (temp_dir, store)
}
