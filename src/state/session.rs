//! Auth session for the current browser user, mirrored into storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and the API client (bearer token); written by the
//! auth flow. Other tabs writing the same storage keys are reconciled through
//! [`SessionStore::apply_external_change`].
//!
//! INVARIANTS
//! ==========
//! - `is_ready` flips to true exactly once, after the first storage read.
//! - Nothing is written to storage before that read completes, so an empty
//!   initial state can never clobber a session persisted by an earlier visit.
//! - Absent values are removed from storage, never stored as `null`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::Storage;

pub const TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

/// Client-held credential plus cached profile.
///
/// `is_ready == false` means "not read yet", never "logged out".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_ready: bool,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// A storage mutation made by another tab (the browser `storage` event).
/// `key == None` means the other tab cleared all of storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    #[must_use]
    pub fn new(key: Option<&str>, new_value: Option<&str>) -> Self {
        Self { key: key.map(str::to_owned), new_value: new_value.map(str::to_owned) }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: Storage> SessionStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default() }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.session.is_ready
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token.clone()
    }

    /// Read the persisted session once. Later calls are no-ops.
    ///
    /// A corrupt user record is removed from storage and dropped; the token is
    /// kept. Readiness is set whatever the outcome.
    pub fn initialize(&mut self) {
        if self.session.is_ready {
            return;
        }
        self.session.token = self.storage.get_item(TOKEN_KEY);
        self.session.user = match self.storage.get_item(USER_KEY) {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    leptos::logging::warn!("discarding corrupt stored user: {e}");
                    self.storage.remove_item(USER_KEY);
                    None
                }
            },
            None => None,
        };
        self.session.is_ready = true;
    }

    /// Replace token and profile; persisted only once ready.
    pub fn set_session(&mut self, token: Option<String>, user: Option<User>) {
        self.session.token = token;
        self.session.user = user;
        if self.session.is_ready {
            self.persist();
        }
    }

    /// Drop the session and both storage keys, whether or not storage has
    /// been read yet. Marks the store ready so a later `initialize` cannot
    /// bring the old token back.
    pub fn clear(&mut self) {
        self.session.token = None;
        self.session.user = None;
        self.session.is_ready = true;
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }

    /// Mirror a change another tab made to storage.
    ///
    /// Only the token and user keys matter; a storage-wide clear removes both.
    /// Never writes back. Returns whether the in-memory session changed.
    pub fn apply_external_change(&mut self, change: &StorageChange) -> bool {
        let before = (self.session.token.clone(), self.session.user.clone());
        match change.key.as_deref() {
            Some(TOKEN_KEY) => self.session.token.clone_from(&change.new_value),
            Some(USER_KEY) => {
                self.session.user = change
                    .new_value
                    .as_deref()
                    .and_then(|raw| serde_json::from_str::<User>(raw).ok());
            }
            Some(_) => return false,
            None => {
                self.session.token = None;
                self.session.user = None;
            }
        }
        before != (self.session.token.clone(), self.session.user.clone())
    }

    fn persist(&self) {
        match &self.session.token {
            Some(token) => self.storage.set_item(TOKEN_KEY, token),
            None => self.storage.remove_item(TOKEN_KEY),
        }
        match &self.session.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.storage.set_item(USER_KEY, &raw),
                Err(e) => leptos::logging::warn!("failed to serialize user: {e}"),
            },
            None => self.storage.remove_item(USER_KEY),
        }
    }
}
