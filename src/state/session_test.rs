use super::*;
use crate::net::types::RecordId;
use crate::util::storage::MemoryStorage;

fn user(id: i64, email: &str) -> User {
    User {
        id: RecordId::Int(id),
        email: email.to_owned(),
        full_name: None,
        role_id: None,
        is_active: None,
        avatar_url: None,
    }
}

fn user_json(id: i64, email: &str) -> String {
    serde_json::to_string(&user(id, email)).unwrap()
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_store_is_not_ready() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(!store.is_ready());
    assert_eq!(store.session(), &Session::default());
}

#[test]
fn initialize_reads_token_and_user() {
    let storage = MemoryStorage::new()
        .with_item(TOKEN_KEY, "T1")
        .with_item(USER_KEY, &user_json(1, "a@b.com"));
    let mut store = SessionStore::new(storage.clone());
    store.initialize();

    assert!(store.is_ready());
    assert_eq!(store.token().as_deref(), Some("T1"));
    assert_eq!(store.session().user, Some(user(1, "a@b.com")));
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn initialize_with_empty_storage_is_ready_and_logged_out() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.initialize();
    assert!(store.is_ready());
    assert!(!store.session().is_authenticated());
}

#[test]
fn corrupt_user_is_discarded_but_token_kept() {
    let storage = MemoryStorage::new()
        .with_item(TOKEN_KEY, "T1")
        .with_item(USER_KEY, "{not json");
    let mut store = SessionStore::new(storage.clone());
    store.initialize();

    assert!(store.is_ready());
    assert_eq!(store.token().as_deref(), Some("T1"));
    assert_eq!(store.session().user, None);
    assert_eq!(storage.get_item(USER_KEY), None);
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T1"));
}

#[test]
fn initialize_runs_only_once() {
    let storage = MemoryStorage::new().with_item(TOKEN_KEY, "T1");
    let mut store = SessionStore::new(storage.clone());
    store.initialize();
    store.clear();
    storage.set_item(TOKEN_KEY, "T2");
    store.initialize();
    assert_eq!(store.token(), None);
}

// =============================================================
// set_session / persistence
// =============================================================

#[test]
fn set_session_before_ready_never_writes() {
    let storage = MemoryStorage::new().with_item(TOKEN_KEY, "OLD");
    let mut store = SessionStore::new(storage.clone());
    store.set_session(None, None);
    store.set_session(Some("T1".to_owned()), Some(user(1, "a@b.com")));

    assert_eq!(storage.write_count(), 0);
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("OLD"));
    assert_eq!(store.token().as_deref(), Some("T1"));
}

#[test]
fn storage_tracks_most_recent_set_session_once_ready() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.initialize();

    store.set_session(Some("T1".to_owned()), None);
    store.set_session(Some("T2".to_owned()), Some(user(2, "b@c.com")));
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T2"));
    assert_eq!(storage.get_item(USER_KEY), Some(user_json(2, "b@c.com")));

    store.set_session(Some("T3".to_owned()), None);
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T3"));
    assert_eq!(storage.get_item(USER_KEY), None);
}

#[test]
fn clear_removes_both_keys() {
    let storage = MemoryStorage::new()
        .with_item(TOKEN_KEY, "T1")
        .with_item(USER_KEY, &user_json(1, "a@b.com"));
    let mut store = SessionStore::new(storage.clone());
    store.initialize();
    store.clear();

    assert!(storage.is_empty());
    assert_eq!(store.session(), &Session { token: None, user: None, is_ready: true });
}

#[test]
fn clear_before_initialize_removes_keys_and_stays_logged_out() {
    let storage = MemoryStorage::new()
        .with_item(TOKEN_KEY, "T1")
        .with_item(USER_KEY, &user_json(1, "a@b.com"));
    let mut store = SessionStore::new(storage.clone());
    store.clear();
    store.initialize();

    assert!(storage.is_empty());
    assert_eq!(store.session(), &Session { token: None, user: None, is_ready: true });
}

#[test]
fn set_session_then_fresh_initialize_round_trips() {
    let storage = MemoryStorage::new();
    let mut first = SessionStore::new(storage.clone());
    first.initialize();
    first.set_session(Some("T1".to_owned()), Some(user(1, "a@b.com")));

    let mut second = SessionStore::new(storage);
    second.initialize();
    assert_eq!(second.token().as_deref(), Some("T1"));
    assert_eq!(second.session().user, Some(user(1, "a@b.com")));
}

// =============================================================
// apply_external_change
// =============================================================

fn ready_store(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::new(storage.clone());
    store.initialize();
    store
}

#[test]
fn external_login_is_mirrored_without_writing() {
    let storage = MemoryStorage::new();
    let mut store = ready_store(&storage);

    assert!(store.apply_external_change(&StorageChange::new(Some(TOKEN_KEY), Some("T1"))));
    assert!(store.apply_external_change(&StorageChange::new(Some(USER_KEY), Some(&user_json(1, "a@b.com")))));
    assert_eq!(store.token().as_deref(), Some("T1"));
    assert_eq!(store.session().user, Some(user(1, "a@b.com")));
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn external_logout_clears_token() {
    let storage = MemoryStorage::new().with_item(TOKEN_KEY, "T1");
    let mut store = ready_store(&storage);
    assert!(store.apply_external_change(&StorageChange::new(Some(TOKEN_KEY), None)));
    assert!(!store.session().is_authenticated());
}

#[test]
fn unrelated_keys_are_ignored() {
    let storage = MemoryStorage::new().with_item(TOKEN_KEY, "T1");
    let mut store = ready_store(&storage);
    assert!(!store.apply_external_change(&StorageChange::new(Some("theme"), Some("dark"))));
    assert_eq!(store.token().as_deref(), Some("T1"));
}

#[test]
fn storage_wide_clear_logs_out() {
    let storage = MemoryStorage::new()
        .with_item(TOKEN_KEY, "T1")
        .with_item(USER_KEY, &user_json(1, "a@b.com"));
    let mut store = ready_store(&storage);
    assert!(store.apply_external_change(&StorageChange::new(None, None)));
    assert_eq!(store.token(), None);
    assert_eq!(store.session().user, None);
}

#[test]
fn corrupt_external_user_mirrors_as_none() {
    let storage = MemoryStorage::new().with_item(USER_KEY, &user_json(1, "a@b.com"));
    let mut store = ready_store(&storage);
    assert!(store.apply_external_change(&StorageChange::new(Some(USER_KEY), Some("garbage"))));
    assert_eq!(store.session().user, None);
}

#[test]
fn identical_external_value_reports_no_change() {
    let storage = MemoryStorage::new().with_item(TOKEN_KEY, "T1");
    let mut store = ready_store(&storage);
    assert!(!store.apply_external_change(&StorageChange::new(Some(TOKEN_KEY), Some("T1"))));
}
