use super::*;

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let handle = storage.clone();
    storage.set_item("access_token", "T1");
    assert_eq!(handle.get_item("access_token").as_deref(), Some("T1"));
    handle.remove_item("access_token");
    assert_eq!(storage.get_item("access_token"), None);
}

#[test]
fn memory_storage_seed_does_not_count_as_write() {
    let storage = MemoryStorage::new().with_item("user", "{}");
    assert_eq!(storage.write_count(), 0);
    assert_eq!(storage.len(), 1);
    storage.remove_item("user");
    assert_eq!(storage.write_count(), 1);
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_noop_outside_browser() {
    let storage = LocalStorage;
    storage.set_item("access_token", "T1");
    assert_eq!(storage.get_item("access_token"), None);
    storage.remove_item("access_token");
}
