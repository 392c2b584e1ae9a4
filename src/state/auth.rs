//! Login, registration and logout orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`AuthFlow`] from `spawn_local`; the flow writes the
//! session store and the auth status through [`Shared`] handles and asks a
//! [`Navigator`] to move between routes.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends as one message in `AuthState::error`, taken from the
//! API `detail` field or a generic fallback. Loading is cleared on every
//! path and the session is left as it was before the attempt.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use super::Shared;
use super::session::SessionStore;
use crate::app::{LANDING_PATH, LOGIN_PATH};
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::RegisterRequest;
use crate::util::storage::Storage;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";

/// Loading and error status for the auth forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    fn finish(&mut self) {
        self.loading = false;
    }

    /// Called on every route change so stale messages do not linger.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Route changes requested by the auth flow.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Adapter for the router's `use_navigate()` closure.
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

pub struct AuthFlow<T, N> {
    api: ApiClient<T>,
    navigator: N,
}

impl<T: Transport, N: Navigator> AuthFlow<T, N> {
    #[must_use]
    pub fn new(api: ApiClient<T>, navigator: N) -> Self {
        Self { api, navigator }
    }

    /// Password login: token, then profile, then landing route.
    ///
    /// The token is stored as soon as it arrives; the profile fetch that
    /// follows uses it explicitly. If that fetch fails the previous session
    /// is restored.
    pub async fn login<S: Storage>(
        &self,
        session: &impl Shared<SessionStore<S>>,
        status: &impl Shared<AuthState>,
        email: &str,
        password: &str,
    ) {
        status.update_with(AuthState::begin);

        let token = match self.api.login(email, password).await {
            Ok(resp) => resp.access_token,
            Err(e) => {
                leptos::logging::warn!("login failed: {e}");
                status.update_with(|s| s.fail(e.user_message(LOGIN_FAILED)));
                return;
            }
        };

        let previous = session.read_with(|s| (s.session().token.clone(), s.session().user.clone()));
        session.update_with(|s| s.set_session(Some(token.clone()), None));

        match self.api.current_user(&token).await {
            Ok(user) => {
                leptos::logging::log!("signed in as {}", user.email);
                session.update_with(|s| s.set_session(Some(token), Some(user)));
                status.update_with(AuthState::finish);
                self.navigator.navigate(LANDING_PATH);
            }
            Err(e) => {
                leptos::logging::warn!("profile fetch after login failed: {e}");
                session.update_with(|s| s.set_session(previous.0, previous.1));
                status.update_with(|s| s.fail(e.user_message(LOGIN_FAILED)));
            }
        }
    }

    /// Create an account, then send the user to the login page. Does not
    /// sign in.
    pub async fn register(&self, status: &impl Shared<AuthState>, payload: &RegisterRequest) {
        status.update_with(AuthState::begin);
        match self.api.register(payload).await {
            Ok(user) => {
                leptos::logging::log!("registered {}", user.email);
                status.update_with(AuthState::finish);
                self.navigator.navigate(LOGIN_PATH);
            }
            Err(e) => {
                leptos::logging::warn!("registration failed: {e}");
                status.update_with(|s| s.fail(e.user_message(REGISTER_FAILED)));
            }
        }
    }

    /// Drop the session locally. No network call.
    pub fn logout<S: Storage>(&self, session: &impl Shared<SessionStore<S>>, status: &impl Shared<AuthState>) {
        logout(session, status, &self.navigator);
    }
}

/// Logout without an API client; the header's sign-out button uses this.
pub fn logout<S: Storage>(
    session: &impl Shared<SessionStore<S>>,
    status: &impl Shared<AuthState>,
    navigator: &impl Navigator,
) {
    session.update_with(SessionStore::clear);
    status.update_with(|s| {
        s.loading = false;
        s.clear_error();
    });
    navigator.navigate(LOGIN_PATH);
}
