//! Key/value persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorage` centralizes hydrate-only `window.localStorage` access so the
//! session store never touches web-sys directly. `MemoryStorage` backs tests
//! and server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Browser storage can be missing (SSR, privacy mode) or full. Failures are
//! logged and swallowed; reads degrade to `None`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string key/value store.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Browser `localStorage`. Looks up the window storage on every call, so the
/// handle itself carries no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for key {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage remove failed for key {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage. Clones share the same map, so a test can keep a handle
/// and inspect what a store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without counting it as a write.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Number of `set_item`/`remove_item` calls made so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.lock().map_or(0, |w| *w)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().map_or(0, |items| items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record_write(&self) {
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.record_write();
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        self.record_write();
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}
