use super::*;

fn store_in(dir: &tempfile::TempDir) -> Storage {
    Storage::new(dir.path().join("profile.json"))
}

#[test]
fn get_on_missing_file_returns_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = store_in(&dir);
    assert_eq!(storage.get("user"), None);
}

#[test]
fn set_then_get_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = store_in(&dir);
    storage.set("user", "alice").expect("set should succeed");
    assert_eq!(storage.get("user"), Some("alice".to_owned()));
}

#[test]
fn set_overwrites_an_existing_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = store_in(&dir);
    storage.set("user", "alice").expect("set");
    storage.set("user", "bob").expect("set");
    assert_eq!(storage.get("user"), Some("bob".to_owned()));
}

#[test]
fn set_preserves_other_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = store_in(&dir);
    storage.set("user", "alice").expect("set");
    storage.set("theme", "dark").expect("set");
    assert_eq!(storage.get("user"), Some("alice".to_owned()));
    assert_eq!(storage.get("theme"), Some("dark".to_owned()));
}

#[test]
fn get_of_a_missing_key_returns_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = store_in(&dir);
    storage.set("user", "alice").expect("set");
    assert_eq!(storage.get("peer"), None);
}

#[test]
fn set_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(dir.path().join("nested/deeper/profile.json"));
    storage.set("user", "alice").expect("set should create parents");
    assert_eq!(storage.get("user"), Some("alice".to_owned()));
}

#[test]
fn corrupt_store_reads_as_empty_and_fails_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    std::fs::write(&path, "not json").expect("write fixture");

    let storage = Storage::new(path);
    assert_eq!(storage.get("user"), None);
    assert!(matches!(
        storage.set("user", "alice"),
        Err(StorageError::Corrupt(_))
    ));
}

#[test]
fn non_object_store_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    std::fs::write(&path, "[1,2,3]").expect("write fixture");

    let storage = Storage::new(path);
    assert!(matches!(
        storage.set("user", "alice"),
        Err(StorageError::NotAnObject)
    ));
}
