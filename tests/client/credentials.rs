use coinfront::{CredentialStore, FileCredentialStore, MemoryCredentialStore, NoCredentials};
use coinfront::core::credentials::AUTH_TOKEN_KEY;

#[test]
fn memory_store_sets_and_clears() {
    let store = MemoryCredentialStore::new(Some("seed".into()));
    assert_eq!(store.token().as_deref(), Some("seed"));

    store.set_token("next");
    assert_eq!(store.token().as_deref(), Some("next"));

    store.clear();
    assert_eq!(store.token(), None);
}

#[test]
fn no_credentials_never_holds_a_token() {
    let store = NoCredentials;
    store.set_token("ignored");
    assert_eq!(store.token(), None);
}

#[test]
fn file_store_missing_file_means_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("session.json"));
    assert_eq!(store.token(), None);
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    FileCredentialStore::new(&path).set_token("abc");

    let reopened = FileCredentialStore::new(&path);
    assert_eq!(reopened.token().as_deref(), Some("abc"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[AUTH_TOKEN_KEY], "abc");
}

#[test]
fn file_store_clear_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"auth_token":"abc","theme":"dark"}"#).unwrap();

    let store = FileCredentialStore::new(&path);
    assert_eq!(store.token().as_deref(), Some("abc"));

    store.clear();
    assert_eq!(store.token(), None);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["theme"], "dark");
    assert!(raw.get(AUTH_TOKEN_KEY).is_none());
}

#[test]
fn file_store_corrupt_file_reads_as_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{broken").unwrap();

    assert_eq!(FileCredentialStore::new(&path).token(), None);
}
