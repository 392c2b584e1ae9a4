//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every shared state signal. Pages and components reach them with
//! `expect_context`; nothing below this module creates state of its own that
//! outlives a route.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::notices::NoticeStack;
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;
use crate::util::guard::route_changed;
use crate::util::storage::LocalStorage;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Where a successful login lands.
pub const LANDING_PATH: &str = "/dashboard";

/// Session signal type provided in context.
pub type SessionSignal = RwSignal<SessionStore<LocalStorage>>;

/// Root application component.
///
/// Provides all shared state contexts, reads the persisted session once the
/// app is mounted and keeps it in step with other tabs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let session: SessionSignal = RwSignal::new(SessionStore::new(LocalStorage));
    let auth = RwSignal::new(AuthState::default());
    let admin = RwSignal::new(AdminState::new(config.page_size));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(auth);
    provide_context(admin);
    provide_context(notices);

    // Storage is only reachable once mounted in the browser.
    Effect::new(move || session.update(SessionStore::initialize));

    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::StorageChange;

        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            let change = StorageChange::new(ev.key().as_deref(), ev.new_value().as_deref());
            let mut changed = false;
            session.update(|s| changed = s.apply_external_change(&change));
            if changed {
                leptos::logging::log!("session updated from another tab");
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text="CollabSphere"/>

        <Router>
            <ClearAuthErrorOnNavigate/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LANDING_PATH/> }/>
                </Routes>
            </main>
            <NoticeStack/>
        </Router>
    }
}

/// Clears any surfaced auth error whenever the path changes.
#[component]
fn ClearAuthErrorOnNavigate() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        if route_changed(previous.as_deref(), &path) {
            auth.update(AuthState::clear_error);
        }
        path
    });
}
