use crate::SessionStore;

use std::fs;

use tempfile::TempDir;
use todo_core::{Session, User};

fn session(token: &str) -> Session {
    Session::new(
        token,
        User {
            id: "u1".to_string(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
        },
    )
}

fn store() -> (TempDir, SessionStore) {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.json"));
    (temp, store)
}

#[test]
fn given_no_file_when_load_then_no_session_and_no_corruption() {
    let (_temp, store) = store();

    let loaded = store.load().unwrap();

    assert!(loaded.session.is_none());
    assert!(!loaded.is_corrupted());
}

#[test]
fn given_saved_session_when_load_then_same_session() {
    let (_temp, store) = store();
    store.save(&session("t1")).unwrap();

    let loaded = store.load().unwrap();

    assert_eq!(loaded.session, Some(session("t1")));
}

#[test]
fn given_saved_session_when_read_raw_then_token_and_user_keys() {
    let (_temp, store) = store();
    store.save(&session("t1")).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();

    assert_eq!(raw["token"], "t1");
    assert_eq!(raw["user"]["id"], "u1");
}

#[test]
fn given_existing_session_when_save_then_overwritten_and_no_temp_left() {
    let (temp, store) = store();
    store.save(&session("t1")).unwrap();

    store.save(&session("t2")).unwrap();

    assert_eq!(store.load().unwrap().session.unwrap().token, "t2");
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn given_missing_parent_dir_when_save_then_created() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("nested/dir/session.json"));

    store.save(&session("t1")).unwrap();

    assert!(store.path().exists());
}

#[cfg(unix)]
#[test]
fn given_saved_session_when_check_permissions_then_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, store) = store();
    store.save(&session("t1")).unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn given_garbage_file_when_load_then_corruption_reported() {
    let (_temp, store) = store();
    fs::write(store.path(), "{ not json").unwrap();

    let loaded = store.load().unwrap();

    assert!(loaded.session.is_none());
    assert!(loaded.is_corrupted());
}

#[test]
fn given_session_when_clear_then_removed() {
    let (_temp, store) = store();
    store.save(&session("t1")).unwrap();

    assert!(store.clear().unwrap());
    assert!(!store.path().exists());
    assert!(store.load().unwrap().session.is_none());
}

#[test]
fn given_no_session_when_clear_then_ok_false() {
    let (_temp, store) = store();

    assert!(!store.clear().unwrap());
}

#[test]
fn given_corrupted_file_when_backup_then_renamed_aside() {
    let (_temp, store) = store();
    fs::write(store.path(), "garbage").unwrap();

    let backup = store.backup_corrupted().unwrap().unwrap();

    assert!(!store.path().exists());
    assert!(backup.exists());
    assert!(
        backup
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("session.json.corrupted.")
    );
}

#[test]
fn given_no_file_when_backup_then_none() {
    let (_temp, store) = store();

    assert!(store.backup_corrupted().unwrap().is_none());
}
