mod fake_backend;

use crate::SessionStore;

use tempfile::TempDir;

/// Session store inside a fresh temp directory
pub(crate) fn temp_store() -> (TempDir, SessionStore) {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.json"));
    (temp, store)
}
