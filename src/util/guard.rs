//! Route guard decision and redirect wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wrap their content in `components::protected::Protected`,
//! which renders according to [`GuardState`] and installs
//! [`install_unauth_redirect`].
//!
//! INVARIANTS
//! ==========
//! - Nothing is decided before the session store has read storage, so a
//!   returning user is never bounced to `/login` on first paint.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::LOGIN_PATH;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::LocalStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Storage not read yet; render nothing.
    Unknown,
    Authenticated,
    /// Ready with no token; redirect.
    Unauthenticated,
}

impl GuardState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        if !session.is_ready {
            Self::Unknown
        } else if session.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// Where to send the user for a guard state, if anywhere. The login redirect
/// replaces the history entry so Back does not return to the guarded page.
#[must_use]
pub fn unauth_redirect(state: GuardState) -> Option<(&'static str, NavigateOptions)> {
    match state {
        GuardState::Unauthenticated => Some((LOGIN_PATH, NavigateOptions { replace: true, ..Default::default() })),
        GuardState::Unknown | GuardState::Authenticated => None,
    }
}

/// True when the router moved to a different path. The first observation
/// (`previous == None`) is the initial render, not a navigation.
#[must_use]
pub fn route_changed(previous: Option<&str>, current: &str) -> bool {
    previous.is_some_and(|p| p != current)
}

/// Redirect to `/login` (replacing history) once the session is ready and
/// carries no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionStore<LocalStorage>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.with(|s| GuardState::from_session(s.session()));
        if let Some((path, options)) = unauth_redirect(state) {
            navigate(path, options);
        }
    });
}
